//! Photo references attached to a journal

use serde::{Deserialize, Serialize};

use crate::{errors::DomainError, value_objects::PhotoId};

/// An uploaded photo attached to a journal draft
///
/// Immutable once created; a photo is only ever removed from a draft, never edited.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct PhotoRef {
    id: PhotoId,
    path: String,
}

impl PhotoRef {
    /// Create a photo reference
    pub fn new(id: PhotoId, path: impl Into<String>) -> Self {
        Self {
            id,
            path: path.into(),
        }
    }

    /// External storage identifier
    pub const fn id(&self) -> &PhotoId {
        &self.id
    }

    /// Display/reference location of the asset
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// One entry of an upload widget result
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadedPhoto {
    /// Location of the uploaded asset
    pub path: String,
    /// Identifier assigned by the upload service
    #[serde(rename = "public_id")]
    pub remote_id: String,
}

impl UploadedPhoto {
    /// Create an upload result entry
    pub fn new(path: impl Into<String>, remote_id: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            remote_id: remote_id.into(),
        }
    }
}

impl TryFrom<UploadedPhoto> for PhotoRef {
    type Error = DomainError;

    fn try_from(upload: UploadedPhoto) -> Result<Self, Self::Error> {
        let id = PhotoId::new(upload.remote_id)
            .map_err(|e| DomainError::InvalidPhotoRef(e.to_string()))?;
        Ok(Self::new(id, upload.path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn upload_converts_to_photo_ref() {
        let upload = UploadedPhoto::new("fake/first/path", "fakeFirstPubId");
        let photo = PhotoRef::try_from(upload).unwrap();
        assert_eq!(photo.id().as_str(), "fakeFirstPubId");
        assert_eq!(photo.path(), "fake/first/path");
    }

    #[test]
    fn upload_without_remote_id_is_rejected() {
        let upload = UploadedPhoto::new("fake/path", "");
        let err = PhotoRef::try_from(upload).unwrap_err();
        assert!(matches!(err, DomainError::InvalidPhotoRef(_)));
    }

    #[test]
    fn upload_result_reads_public_id() {
        let json = r#"{"path":"fake/first/path","public_id":"fakeFirstPubId"}"#;
        let upload: UploadedPhoto = serde_json::from_str(json).unwrap();
        assert_eq!(upload.remote_id, "fakeFirstPubId");
        assert_eq!(upload.path, "fake/first/path");
    }
}
