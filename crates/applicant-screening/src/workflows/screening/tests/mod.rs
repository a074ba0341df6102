mod common;
mod completeness;
mod resolver;
mod routing;
