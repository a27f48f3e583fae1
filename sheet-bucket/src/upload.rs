//! R2 uploader: implements the core [`BucketUploader`] trait over the S3 API.
//!
//! Cloudflare R2 speaks the S3 protocol on an account-scoped endpoint
//! (`https://<account_id>.r2.cloudflarestorage.com`, region `auto`), so the
//! client is a plain `aws-sdk-s3` client with explicit credentials. The
//! credentials arrive as a constructed [`R2Credentials`] value; this module
//! never reads the environment itself.

use std::path::Path;

use async_trait::async_trait;
use aws_sdk_s3::config::{Credentials, Region};
use aws_sdk_s3::error::ProvideErrorMetadata;
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::Client;
use sheet_bucket_core::contract::{BucketUploader, UploadReceipt};
use sheet_bucket_core::error::UploadError;
use tracing::{error, info};

/// Access credentials for one R2 account.
#[derive(Debug, Clone)]
pub struct R2Credentials {
    pub access_key: String,
    pub secret_key: String,
    pub account_id: String,
}

impl R2Credentials {
    /// Account-scoped S3 endpoint for this account.
    pub fn endpoint_url(&self) -> String {
        format!("https://{}.r2.cloudflarestorage.com", self.account_id)
    }
}

/// S3-compatible client bound to one bucket.
pub struct R2Client {
    client: Client,
    bucket: String,
}

impl R2Client {
    pub fn new(credentials: &R2Credentials, bucket: impl Into<String>) -> Self {
        let provider = Credentials::new(
            &credentials.access_key,
            &credentials.secret_key,
            None,
            None,
            "sheet-bucket",
        );

        let config = aws_sdk_s3::Config::builder()
            .credentials_provider(provider)
            .region(Region::new("auto"))
            .endpoint_url(credentials.endpoint_url())
            .build();

        let bucket = bucket.into();
        info!(bucket = %bucket, account_id = %credentials.account_id, "R2 client initialised");
        R2Client {
            client: Client::from_conf(config),
            bucket,
        }
    }
}

#[async_trait]
impl BucketUploader for R2Client {
    async fn upload_file(
        &self,
        local_path: &Path,
        object_key: &str,
    ) -> Result<UploadReceipt, UploadError> {
        let metadata = tokio::fs::metadata(local_path).await.map_err(|e| {
            error!(error = ?e, path = %local_path.display(), "Local artifact not found");
            UploadError::LocalFileMissing {
                path: local_path.to_path_buf(),
            }
        })?;
        let bytes = metadata.len();

        let body = ByteStream::from_path(local_path).await.map_err(|e| {
            error!(error = ?e, path = %local_path.display(), "Failed to open local artifact");
            UploadError::LocalFileMissing {
                path: local_path.to_path_buf(),
            }
        })?;

        info!(
            bucket = %self.bucket,
            object_key = %object_key,
            bytes,
            "Uploading artifact to R2"
        );

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(object_key)
            .content_type("application/json")
            .body(body)
            .send()
            .await
            .map_err(|e| {
                error!(error = ?e, object_key = %object_key, "R2 upload failed");
                match e.code() {
                    Some("InvalidAccessKeyId")
                    | Some("SignatureDoesNotMatch")
                    | Some("AccessDenied") => {
                        UploadError::InvalidCredentials(format!("{:?}", e.code()))
                    }
                    _ => UploadError::Service(format!("{e:?}")),
                }
            })?;

        info!(bucket = %self.bucket, object_key = %object_key, "Upload succeeded");
        Ok(UploadReceipt {
            object_key: object_key.to_string(),
            bytes,
        })
    }
}
