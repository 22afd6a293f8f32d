pub(crate) mod allocator;
