mod augmenting_path;
mod edmonds_karp;

pub(crate) use augmenting_path::augmenting_path;
pub use edmonds_karp::edmonds_karp;
