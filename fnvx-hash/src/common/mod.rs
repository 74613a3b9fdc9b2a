/// Common types shared by every FNV variant

pub mod hash_types;
