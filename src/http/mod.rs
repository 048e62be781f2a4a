//! HTTP building blocks
//!
//! Response builders and the content-type table.

pub mod mime;
pub mod response;

pub use response::{
    build_404_response, build_500_response, build_asset_response, build_spa_response,
};
