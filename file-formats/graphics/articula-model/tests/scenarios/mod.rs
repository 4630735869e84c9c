mod builtin_animation;
mod tree_integrity;
