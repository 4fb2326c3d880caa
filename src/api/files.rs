//! File upload and management endpoints.

use crate::client::ChatGptClient;
use crate::error::{ClientError, ClientResult};
use crate::models::{DeleteFileResponse, File, FileList, FilePurpose};
use crate::transport::{decode_json, read_text};
use reqwest::multipart::{Form, Part};
use tokio::io::{AsyncRead, AsyncReadExt};

const FILES: &str = "files";

/// Filename reported for uploads that do not name one.
pub const DEFAULT_UPLOAD_FILENAME: &str = "mydata.jsonl";

impl ChatGptClient {
    /// Upload the contents of `file` as `mydata.jsonl`.
    ///
    /// The reader is consumed to the end before the request is sent.
    pub async fn upload_file<R>(&self, file: R, purpose: FilePurpose) -> ClientResult<File>
    where
        R: AsyncRead + Unpin,
    {
        self.upload_file_named(DEFAULT_UPLOAD_FILENAME, file, purpose)
            .await
    }

    /// Upload the contents of `file` under the given filename.
    pub async fn upload_file_named<R>(
        &self,
        filename: &str,
        mut file: R,
        purpose: FilePurpose,
    ) -> ClientResult<File>
    where
        R: AsyncRead + Unpin,
    {
        let mut contents = Vec::new();
        file.read_to_end(&mut contents)
            .await
            .map_err(|source| ClientError::FileRead { source })?;

        let form = Form::new()
            .text("purpose", String::from(purpose))
            .part("file", Part::bytes(contents).file_name(filename.to_string()));

        let response = self.transport.post_multipart(&[FILES], form).await?;
        decode_json(response).await
    }

    pub async fn list_files(&self) -> ClientResult<FileList> {
        let response = self.transport.get(&[FILES]).await?;
        decode_json(response).await
    }

    pub async fn retrieve_file(&self, file_id: &str) -> ClientResult<File> {
        let response = self.transport.get(&[FILES, file_id]).await?;
        decode_json(response).await
    }

    pub async fn delete_file(&self, file_id: &str) -> ClientResult<DeleteFileResponse> {
        let response = self.transport.delete(&[FILES, file_id]).await?;
        decode_json(response).await
    }

    /// Raw contents of a stored file.
    pub async fn retrieve_file_content(&self, file_id: &str) -> ClientResult<String> {
        let response = self.transport.get(&[FILES, file_id, "content"]).await?;
        read_text(response).await
    }
}
