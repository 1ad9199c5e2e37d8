pub trait Sailed {}

impl Sailed for crate::Fixed {}
