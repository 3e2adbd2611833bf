mod classification;
mod common;
mod recommendations;
