/*!
# Utilities

Helper traits shared by the algorithms, most importantly the [`Set`] abstraction that lets
callers provide their own visited-set to a traversal.
*/

pub mod set;

pub use set::Set;
