pub(crate) mod layers;
pub(crate) mod map;
