pub(crate) mod overwrite;
pub(crate) mod rename;
pub(crate) mod table;
pub(crate) mod walker;
