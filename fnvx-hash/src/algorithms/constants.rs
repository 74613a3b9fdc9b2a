/// FNV primes and offset bases for every supported width
///
/// The wide constants are parsed once, on first use, from their published
/// decimal forms. Each entry also carries the `2^W - 1` truncation mask.

use crate::common::hash_types::BitWidth;
use num_bigint::BigUint;
use num_traits::One;
use once_cell::sync::Lazy;
use tracing::debug;

/// 32-bit FNV prime (2^24 + 2^8 + 0x93)
pub const FNV_PRIME_32: u32 = 0x0100_0193;
/// 32-bit FNV offset basis
pub const FNV_OFFSET_BASIS_32: u32 = 0x811c_9dc5;

/// 64-bit FNV prime (2^40 + 2^8 + 0xb3)
pub const FNV_PRIME_64: u64 = 0x0000_0100_0000_01b3;
/// 64-bit FNV offset basis
pub const FNV_OFFSET_BASIS_64: u64 = 0xcbf2_9ce4_8422_2325;

const PRIME_DECIMAL: [(BitWidth, &str); 6] = [
    (BitWidth::W32, "16777619"),
    (BitWidth::W64, "1099511628211"),
    (BitWidth::W128, "309485009821345068724781371"),
    (BitWidth::W256, "374144419156711147060143317175368453031918731002211"),
    (
        BitWidth::W512,
        "35835915874844867368919076489095108449946327955754392558399825615420669938882575126094039892345713852759",
    ),
    (
        BitWidth::W1024,
        "5016456510113118655434598811035278955030765345404790744303017523831112055108147451509157692220295382716162651878526895249385292291816524375083746691371804094271873160484737966720260389217684476157468082573",
    ),
];

const OFFSET_DECIMAL: [(BitWidth, &str); 6] = [
    (BitWidth::W32, "2166136261"),
    (BitWidth::W64, "14695981039346656037"),
    (BitWidth::W128, "144066263297769815596495629667062367629"),
    (
        BitWidth::W256,
        "100029257958052580907070968620625704837092796014241193945225284501741471925557",
    ),
    (
        BitWidth::W512,
        "9659303129496669498009435400716310466090418745672637896108374329434462657994582932197716438449813051892206539805784495328239340083876191928701583869517785",
    ),
    (
        BitWidth::W1024,
        "14197795064947621068722070641403218320880622795441933960878474914617582723252296732303717722150864096521202355549365628174669108571814760471015076148029755969804077320157692458563003215304957150157403644460363550505412711285966361610267868082893823963790439336411086884584107735010676915",
    ),
];

/// Constants driving one width of the mixing engine
#[derive(Debug, Clone)]
pub struct FnvParams {
    /// Width these constants belong to
    pub bits: BitWidth,
    /// FNV prime multiplier
    pub prime: BigUint,
    /// FNV-1 / FNV-1a initial accumulator
    pub offset_basis: BigUint,
    /// `2^bits - 1`
    pub mask: BigUint,
}

static FNV_PARAMS: Lazy<[FnvParams; 6]> = Lazy::new(|| {
    let params = BitWidth::ALL.map(|bits| {
        let index = index_of(bits);
        debug_assert_eq!(PRIME_DECIMAL[index].0, bits);
        debug_assert_eq!(OFFSET_DECIMAL[index].0, bits);

        FnvParams {
            bits,
            prime: parse_decimal(PRIME_DECIMAL[index].1),
            offset_basis: parse_decimal(OFFSET_DECIMAL[index].1),
            mask: (BigUint::one() << bits.bits()) - BigUint::one(),
        }
    });
    debug!("Initialized FNV constant tables for {} widths", params.len());
    params
});

#[inline]
const fn index_of(bits: BitWidth) -> usize {
    match bits {
        BitWidth::W32 => 0,
        BitWidth::W64 => 1,
        BitWidth::W128 => 2,
        BitWidth::W256 => 3,
        BitWidth::W512 => 4,
        BitWidth::W1024 => 5,
    }
}

fn parse_decimal(digits: &str) -> BigUint {
    BigUint::parse_bytes(digits.as_bytes(), 10).expect("built-in FNV constant is valid decimal")
}

/// All constants for a width
pub fn params(bits: BitWidth) -> &'static FnvParams {
    &FNV_PARAMS[index_of(bits)]
}

/// FNV prime for a width
pub fn prime(bits: BitWidth) -> &'static BigUint {
    &params(bits).prime
}

/// FNV offset basis for a width
pub fn offset_basis(bits: BitWidth) -> &'static BigUint {
    &params(bits).offset_basis
}
