mod svg;

pub(crate) use svg::*;
