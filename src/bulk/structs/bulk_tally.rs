#[derive(Default, PartialEq, Eq, Clone, Copy, Debug)]
pub struct BulkTally {
    pub requested: usize,
    pub processed: usize,
    pub not_found: usize,
    pub invalid: usize,
}
