pub(crate) mod add_slugs;
pub(crate) mod check;
pub(crate) mod config;
pub(crate) mod fix_categories;
pub(crate) mod slugify;
