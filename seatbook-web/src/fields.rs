/// What the form adapter does with the hidden inputs that already carry the
/// seat field's name
#[derive(Debug, PartialEq, Eq)]
pub enum FieldPlan<T> {
    /// None exist yet; append a fresh one
    Create,
    /// Write the value into `keep` and remove every stray
    Reuse { keep: T, strays: Vec<T> },
}

/// Pick the first existing field, in document order, as the one to keep
pub fn plan_upsert<T>(existing: impl IntoIterator<Item = T>) -> FieldPlan<T> {
    let mut existing = existing.into_iter();
    match existing.next() {
        Some(keep) => FieldPlan::Reuse {
            keep,
            strays: existing.collect(),
        },
        None => FieldPlan::Create,
    }
}
