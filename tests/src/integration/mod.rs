//! Cross-component integration tests.

mod flows;
mod guards;
