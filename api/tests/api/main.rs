mod book;
mod loan;
mod stats;
mod user;

#[macro_export]
macro_rules! deserialize_json {
    ($res:expr, $target:ty) => {{
        let bytes = axum::body::to_bytes($res.into_body(), usize::MAX).await?;
        serde_json::from_slice::<$target>(&bytes)?
    }};
}
