/// Produces the timestamp string stamped on each snapshot.
pub trait Clock: Send + Sync {
    fn now_string(&self) -> String;
}
