// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

use crate::codeable::keys::{XCBuildConfigurationKey, XCConfigurationListKey};
use crate::codeable::{builder, codeable, Codeable, PBXFileReference};
use crate::coder::BuildSettings;
use crate::error::Error;
use crate::object::DefaultKeyedObject;
use crate::types::ObjectId;

codeable! {
    /// A named set of build settings, such as `Debug` or `Release`.
    XCBuildConfiguration => XCBuildConfigurationKey
}

impl<'g> XCBuildConfiguration<'g> {
    pub fn name(&self) -> Result<Option<String>, Error> {
        self.try_decode(XCBuildConfigurationKey::Name)
    }

    /// Build settings; empty when absent.
    pub fn build_settings(&self) -> Result<BuildSettings, Error> {
        self.try_decode(XCBuildConfigurationKey::BuildSettings)
            .map(Option::unwrap_or_default)
    }

    /// The `.xcconfig` file this configuration is based on.
    pub fn base_configuration_reference(&self) -> Result<Option<PBXFileReference<'g>>, Error> {
        self.try_decode(XCBuildConfigurationKey::BaseConfigurationReference)
    }
}

builder!(XCBuildConfigurationBuilder for XCBuildConfiguration);

impl XCBuildConfigurationBuilder {
    fn new() -> XCBuildConfigurationBuilder {
        let mut inner = DefaultKeyedObject::builder(XCBuildConfiguration::ISA);
        inner.requires(XCBuildConfigurationKey::Name);
        XCBuildConfigurationBuilder { inner }
    }

    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.inner.put(XCBuildConfigurationKey::Name, name.into());
        self
    }

    pub fn build_settings(mut self, settings: BuildSettings) -> Self {
        self.inner
            .put(XCBuildConfigurationKey::BuildSettings, settings);
        self
    }

    pub fn base_configuration_reference(mut self, file: ObjectId) -> Self {
        self.inner
            .put(XCBuildConfigurationKey::BaseConfigurationReference, file);
        self
    }
}

codeable! {
    /// The build configurations of a project or target.
    XCConfigurationList => XCConfigurationListKey
}

impl<'g> XCConfigurationList<'g> {
    pub fn build_configurations(&self) -> Result<Vec<XCBuildConfiguration<'g>>, Error> {
        self.try_decode(XCConfigurationListKey::BuildConfigurations)
            .map(Option::unwrap_or_default)
    }

    pub fn default_configuration_is_visible(&self) -> Result<bool, Error> {
        self.try_decode(XCConfigurationListKey::DefaultConfigurationIsVisible)
            .map(|flag| flag.unwrap_or(false))
    }

    pub fn default_configuration_name(&self) -> Result<Option<String>, Error> {
        self.try_decode(XCConfigurationListKey::DefaultConfigurationName)
    }

    /// The configuration called `name`, if any.
    pub fn configuration(&self, name: &str) -> Result<Option<XCBuildConfiguration<'g>>, Error> {
        for configuration in self.build_configurations()? {
            if configuration.name()?.as_deref() == Some(name) {
                return Ok(Some(configuration));
            }
        }
        Ok(None)
    }
}

builder!(XCConfigurationListBuilder for XCConfigurationList);

impl XCConfigurationListBuilder {
    fn new() -> XCConfigurationListBuilder {
        XCConfigurationListBuilder {
            inner: DefaultKeyedObject::builder(XCConfigurationList::ISA),
        }
    }

    pub fn build_configuration(mut self, configuration: ObjectId) -> Self {
        self.inner
            .add(XCConfigurationListKey::BuildConfigurations, configuration);
        self
    }

    pub fn build_configurations(mut self, configurations: Vec<ObjectId>) -> Self {
        self.inner
            .put(XCConfigurationListKey::BuildConfigurations, configurations);
        self
    }

    pub fn default_configuration_is_visible(mut self, flag: bool) -> Self {
        self.inner
            .put(XCConfigurationListKey::DefaultConfigurationIsVisible, flag);
        self
    }

    pub fn default_configuration_name<S: Into<String>>(mut self, name: S) -> Self {
        self.inner
            .put(XCConfigurationListKey::DefaultConfigurationName, name.into());
        self
    }
}
