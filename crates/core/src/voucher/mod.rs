//! Prepaid voucher conversion.
//!
//! Carrier vouchers (GYD) are converted to digital balance at the rate of the
//! bracket the voucher amount falls into.

pub mod calculator;
pub mod carriers;
pub mod code;

pub use calculator::{VoucherConversion, convert_voucher};
pub use carriers::CarrierTables;
pub use code::VoucherCode;
