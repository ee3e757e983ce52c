mod common;
mod routing;
mod survey;
