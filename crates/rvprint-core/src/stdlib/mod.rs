//! Numeric conversion.

pub mod conversion;

pub use conversion::{
    CapacityExhausted, MAX_DECIMAL_LEN, decimal_digits, i_to_str, l_to_str, ll_to_str,
    ui_to_str, ul_to_str, ull_to_str, write_decimal,
};
