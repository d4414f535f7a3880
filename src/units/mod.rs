//! 단위 정의 및 변환 모듈 모음.

pub mod density;
pub mod length;
pub mod price;

pub use density::{convert_density, DensityUnit, KG_PER_M3_PER_LB_PER_FT3};
pub use length::{convert_length, to_meters, LengthUnit};
pub use price::{convert_price, to_per_kg, PriceUnit};
