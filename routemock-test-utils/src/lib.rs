pub mod builder;
pub mod constant;
pub mod context;
pub mod error;
pub mod fixtures;
pub mod logging;

pub use builder::TestBuilder;
pub use context::TestContext;
pub use error::TestError;

pub mod prelude {
    pub use crate::{
        constant::{TEST_API_TOKEN, TEST_PASSWORD, TEST_PRODUCT, TEST_USERNAME},
        fixtures::factory,
        TestBuilder, TestContext, TestError,
    };
}
