pub mod normal;

pub use normal::{
    erf, inverse_normal_cdf, inverse_standard_normal, normal_cdf, normal_pdf,
    standard_normal_cdf, standard_normal_pdf,
};
