use std::path::Path;

use aws_config::BehaviorVersion;
use aws_sdk_s3::primitives::ByteStream;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("document has no usable file name: {0}")]
    Name(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to upload s3://{bucket}/{key}: {source}")]
    Upload {
        bucket: String,
        key: String,
        source: Box<dyn std::error::Error + Send + Sync>
    }
}

///
/// Archive a source document to the given bucket, keyed by its file name,
/// returning the object location. Invoked once per document.
///
pub fn upload(path: &String, bucket: &String) -> Result<String, StoreError> {
    let key = match Path::new(path).file_name() {
        Some(name) => name.to_string_lossy().to_string(),
        None => { return Err(StoreError::Name(path.to_owned())); }
    };

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    runtime.block_on(async {
        let config = aws_config::load_defaults(BehaviorVersion::latest()).await;
        let client = aws_sdk_s3::Client::new(&config);

        let body = ByteStream::from_path(&path)
            .await
            .map_err(|err| StoreError::Upload {
                bucket: bucket.to_owned(),
                key: key.to_owned(),
                source: Box::new(err)
            })?;

        client.put_object()
            .bucket(bucket)
            .key(&key)
            .body(body)
            .send()
            .await
            .map_err(|err| StoreError::Upload {
                bucket: bucket.to_owned(),
                key: key.to_owned(),
                source: Box::new(err)
            })?;

        Ok(format!("s3://{}/{}", bucket, key))
    })
}
