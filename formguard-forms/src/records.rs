// Form records of the application

use crate::FormData;
use formguard_validation::{FileHandle, Record};

/// Builds a record from a decoded form.
///
/// Missing values become empty strings and missing files `None`, leaving
/// presence checks to the record's rules.
pub trait FromForm: Sized {
    fn from_form(form: &FormData) -> Self;
}

/// Account creation
#[derive(Debug, Clone, Default, Record)]
#[validate(rename_all = "PascalCase")]
pub struct Signup {
    #[validate("required,max=30,email")]
    pub email: String,
    #[validate("required,min=3,max=20")]
    pub username: String,
    #[validate("required,confirm=Password")]
    pub confirm: String,
    #[validate("required,min=7,max=30,password")]
    pub password: String,
}

impl FromForm for Signup {
    fn from_form(form: &FormData) -> Self {
        Self {
            email: form.value_or_empty("email"),
            username: form.value_or_empty("username"),
            confirm: form.value_or_empty("confirm"),
            password: form.value_or_empty("password"),
        }
    }
}

/// Email change, confirmed with the current password
#[derive(Debug, Clone, Default, Record)]
#[validate(rename_all = "PascalCase")]
pub struct ProfileEmail {
    #[validate(rules = "required", rename = "RandomID")]
    pub random_id: String,
    #[validate("required,email")]
    pub email: String,
    #[validate("required,min=7,password")]
    pub password: String,
}

impl FromForm for ProfileEmail {
    fn from_form(form: &FormData) -> Self {
        Self {
            random_id: form.value_or_empty("randomId"),
            email: form.value_or_empty("email"),
            password: form.value_or_empty("password"),
        }
    }
}

/// Password change
#[derive(Debug, Clone, Default, Record)]
#[validate(rename_all = "PascalCase")]
pub struct ProfilePassword {
    #[validate(rules = "required", rename = "RandomID")]
    pub random_id: String,
    #[validate("required,min=7,password")]
    pub old_password: String,
    #[validate("required,min=7,password")]
    pub new_password: String,
}

impl FromForm for ProfilePassword {
    fn from_form(form: &FormData) -> Self {
        Self {
            random_id: form.value_or_empty("randomId"),
            old_password: form.value_or_empty("old_password"),
            new_password: form.value_or_empty("new_password"),
        }
    }
}

/// Profile preferences. Every field is optional.
#[derive(Debug, Clone, Default, Record)]
#[validate(rename_all = "PascalCase")]
pub struct ProfilePrefs {
    pub avatar_id: String,
    pub tumblr: String,
    pub twitter: String,
    pub facebook: String,
}

impl FromForm for ProfilePrefs {
    fn from_form(form: &FormData) -> Self {
        Self {
            avatar_id: form.value_or_empty("AvatarId"),
            tumblr: form.value_or_empty("TumblrBlog"),
            twitter: form.value_or_empty("TwitterHandle"),
            facebook: form.value_or_empty("FacebookProfile"),
        }
    }
}

/// Social links. Every field is optional.
#[derive(Debug, Clone, Default, Record)]
#[validate(rename_all = "PascalCase")]
pub struct SocialPrefs {
    pub tumblr: String,
    pub twitter: String,
    pub facebook: String,
}

impl FromForm for SocialPrefs {
    fn from_form(form: &FormData) -> Self {
        Self {
            tumblr: form.value_or_empty("TumblrBlog"),
            twitter: form.value_or_empty("TwitterHandle"),
            facebook: form.value_or_empty("FacebookProfile"),
        }
    }
}

/// Avatar upload from the profile page, without constraints
#[derive(Debug, Clone, Default, Record)]
#[validate(rename_all = "PascalCase")]
pub struct ProfileAvatar {
    pub avatar_file: Option<FileHandle>,
}

impl FromForm for ProfileAvatar {
    fn from_form(form: &FormData) -> Self {
        Self {
            avatar_file: form.file("avatar").cloned(),
        }
    }
}

/// Avatar upload.
///
/// The comma in the type list ends the `file_types` rule, so `image/jpeg`
/// is read as a separate, unknown rule and only PNG passes the type check.
#[derive(Debug, Clone, Default, Record)]
#[validate(rename_all = "PascalCase")]
pub struct Avatar {
    #[validate(rules = "required", rename = "RandomID")]
    pub random_id: String,
    #[validate("file_required,file_max_size=2MB,file_types=image/png,image/jpeg")]
    pub avatar_file: Option<FileHandle>,
}

impl FromForm for Avatar {
    fn from_form(form: &FormData) -> Self {
        Self {
            random_id: form.value_or_empty("randomId"),
            avatar_file: form.file("avatar").cloned(),
        }
    }
}

/// Comic upload: metadata, a cover, previews and archives
#[derive(Debug, Clone, Default, Record)]
#[validate(rename_all = "PascalCase")]
pub struct UploadRequest {
    #[validate("required")]
    pub title: String,
    #[validate("required")]
    pub author: String,
    #[validate("required")]
    pub category: String,
    pub description: String,
    #[validate("file_required,file_types=image/png;image/jpeg;image/jpg;image/webp")]
    pub cover: Option<FileHandle>,
    #[validate("required,gt=0,dive,file_required,file_types=image/png;image/jpeg;image/jpg;image/webp")]
    pub previews: Vec<Option<FileHandle>>,
    #[validate(
        "required,gt=0,dive,file_types=application/vnd.comicbook+zip;application/vnd.comicbook-rar;application/zip;application/vnd.rar;application/pdf"
    )]
    pub archives: Vec<Option<FileHandle>>,
}

impl FromForm for UploadRequest {
    fn from_form(form: &FormData) -> Self {
        Self {
            title: form.value_or_empty("title"),
            author: form.value_or_empty("author"),
            category: form.value_or_empty("category"),
            description: form.value_or_empty("description"),
            cover: form.file("cover").cloned(),
            previews: form.files("previews[]").to_vec(),
            archives: form.files("archives[]").to_vec(),
        }
    }
}
