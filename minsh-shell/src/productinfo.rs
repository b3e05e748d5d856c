//! Information about this project.

/// The formal name of this product.
pub const PRODUCT_NAME: &str = "minsh";

/// The version of the product, in string form.
pub const PRODUCT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Where to report problems.
pub const PRODUCT_REPO: &str = env!("CARGO_PKG_REPOSITORY");

pub(crate) fn get_product_display_str() -> String {
    std::format!("{PRODUCT_NAME} version {PRODUCT_VERSION} - {PRODUCT_REPO}")
}
