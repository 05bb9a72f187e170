//! CLI command implementations.

mod publish;

pub(crate) use publish::PublishArgs;
