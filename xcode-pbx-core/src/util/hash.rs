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

//! 128-bit MurmurHash3 (x64 variant), used to derive global IDs.

const C1: u64 = 0x87c37b91114253d5;
const C2: u64 = 0x4cf5ad432745937f;

fn fmix64(mut k: u64) -> u64 {
    k ^= k >> 33;
    k = k.wrapping_mul(0xff51afd7ed558ccd);
    k ^= k >> 33;
    k = k.wrapping_mul(0xc4ceb9fe1a85ec53);
    k ^= k >> 33;
    k
}

#[inline(always)]
fn mix_k1(k1: u64) -> u64 {
    k1.wrapping_mul(C1).rotate_left(31).wrapping_mul(C2)
}

#[inline(always)]
fn mix_k2(k2: u64) -> u64 {
    k2.wrapping_mul(C2).rotate_left(33).wrapping_mul(C1)
}

fn read_u64(bytes: &[u8]) -> u64 {
    let mut buf = [0u8; 8];
    buf[..bytes.len()].copy_from_slice(bytes);
    u64::from_le_bytes(buf)
}

pub fn murmurhash3_x64_128(bytes: &[u8], seed: u64) -> (u64, u64) {
    let (mut h1, mut h2) = (seed, seed);

    let mut blocks = bytes.chunks_exact(16);
    for block in &mut blocks {
        let (lo, hi) = block.split_at(8);
        h1 ^= mix_k1(read_u64(lo));
        h1 = h1
            .rotate_left(27)
            .wrapping_add(h2)
            .wrapping_mul(5)
            .wrapping_add(0x52dce729);

        h2 ^= mix_k2(read_u64(hi));
        h2 = h2
            .rotate_left(31)
            .wrapping_add(h1)
            .wrapping_mul(5)
            .wrapping_add(0x38495ab5);
    }

    // Zero tail words mix to zero, so short tails need no special casing.
    let tail = blocks.remainder();
    let (lo, hi) = tail.split_at(tail.len().min(8));
    h2 ^= mix_k2(read_u64(hi));
    h1 ^= mix_k1(read_u64(lo));

    h1 ^= bytes.len() as u64;
    h2 ^= bytes.len() as u64;

    h1 = h1.wrapping_add(h2);
    h2 = h2.wrapping_add(h1);

    h1 = fmix64(h1);
    h2 = fmix64(h2);

    h1 = h1.wrapping_add(h2);
    h2 = h2.wrapping_add(h1);

    (h1, h2)
}

#[cfg(test)]
mod tests {
    use super::murmurhash3_x64_128;

    #[test]
    fn test_empty_string() {
        assert_eq!(murmurhash3_x64_128(b"", 0), (0, 0));
    }

    #[test]
    fn test_tail_lengths() {
        assert_eq!(
            murmurhash3_x64_128(b"1", 0),
            (8213365047359667313, 10676604921780958775)
        );
        assert_eq!(
            murmurhash3_x64_128(b"1234", 0),
            (619023178690193332, 3755592904005385637)
        );
        assert_eq!(
            murmurhash3_x64_128(b"12345678", 0),
            (4272337174398058908, 10464973996478965079)
        );
        assert_eq!(
            murmurhash3_x64_128(b"123456789", 0),
            (4360720697772133540, 11094893415607738629)
        );
    }

    #[test]
    fn test_seed_changes_hash() {
        assert_ne!(
            murmurhash3_x64_128(b"PBXGroup", 0),
            murmurhash3_x64_128(b"PBXGroup", 47)
        );
    }
}
