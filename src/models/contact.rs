//! Contact record submitted to RD Station.

use crate::domain::{validate_email, validate_url, ContactIdentifier, ValidationError};
use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

/// Flat key/value mapping sent to the API.
pub type WireRecord = Map<String, Value>;

/// A contact being prepared for submission.
///
/// Fields are validated as they are assigned: a setter that rejects its input
/// leaves the contact untouched. Serialization additionally requires the field
/// backing the declared [`ContactIdentifier`] to be filled in.
///
/// # Example
///
/// ```
/// use rdstation_client::Contact;
///
/// let mut contact = Contact::default();
/// contact.set_email("jane@example.com").unwrap();
/// contact.set_name("Jane");
///
/// let record = contact.to_wire_record().unwrap();
/// assert_eq!(record["email"], "jane@example.com");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Contact {
    identifier: ContactIdentifier,
    uuid: Option<String>,
    name: Option<String>,
    email: Option<String>,
    job_title: Option<String>,
    bio: Option<String>,
    website: Option<String>,
    linkedin: Option<String>,
    personal_phone: Option<String>,
    city: Option<String>,
    state: Option<String>,
    country: Option<String>,
    tags: Option<Vec<String>>,
    extra_emails: Option<Vec<String>>,
    extra_fields: Map<String, Value>,
}

impl Contact {
    /// Create a contact addressed by the identifier kind named `identifier`.
    ///
    /// `extra_fields` are copied verbatim into the wire record.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidIdentifier` if `identifier` is neither
    /// `email` nor `uuid`.
    pub fn new(identifier: &str, extra_fields: Map<String, Value>) -> Result<Self, ValidationError> {
        let identifier = identifier.parse::<ContactIdentifier>()?;
        Ok(Self::with_identifier(identifier, extra_fields))
    }

    /// Create a contact from an already-parsed identifier kind.
    pub fn with_identifier(identifier: ContactIdentifier, extra_fields: Map<String, Value>) -> Self {
        Self {
            identifier,
            extra_fields,
            ..Self::default()
        }
    }

    pub fn identifier(&self) -> ContactIdentifier {
        self.identifier
    }

    pub fn extra_fields(&self) -> &Map<String, Value> {
        &self.extra_fields
    }

    pub fn uuid(&self) -> Option<&str> {
        self.uuid.as_deref()
    }

    pub fn set_uuid(&mut self, uuid: impl Into<String>) {
        self.uuid = Some(uuid.into());
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = Some(name.into());
    }

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Set the primary email.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` and keeps the previous email if
    /// the address is malformed.
    pub fn set_email(&mut self, email: impl Into<String>) -> Result<(), ValidationError> {
        let email = email.into();
        validate_email(&email)?;
        self.email = Some(email);
        Ok(())
    }

    pub fn job_title(&self) -> Option<&str> {
        self.job_title.as_deref()
    }

    pub fn set_job_title(&mut self, job_title: impl Into<String>) {
        self.job_title = Some(job_title.into());
    }

    pub fn bio(&self) -> Option<&str> {
        self.bio.as_deref()
    }

    pub fn set_bio(&mut self, bio: impl Into<String>) {
        self.bio = Some(bio.into());
    }

    pub fn website(&self) -> Option<&str> {
        self.website.as_deref()
    }

    /// Set the website.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidUrl` and keeps the previous website if
    /// the value is not an absolute URL.
    pub fn set_website(&mut self, website: impl Into<String>) -> Result<(), ValidationError> {
        let website = website.into();
        validate_url(&website)?;
        self.website = Some(website);
        Ok(())
    }

    pub fn linkedin(&self) -> Option<&str> {
        self.linkedin.as_deref()
    }

    pub fn set_linkedin(&mut self, linkedin: impl Into<String>) {
        self.linkedin = Some(linkedin.into());
    }

    pub fn personal_phone(&self) -> Option<&str> {
        self.personal_phone.as_deref()
    }

    pub fn set_personal_phone(&mut self, personal_phone: impl Into<String>) {
        self.personal_phone = Some(personal_phone.into());
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn set_city(&mut self, city: impl Into<String>) {
        self.city = Some(city.into());
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn set_state(&mut self, state: impl Into<String>) {
        self.state = Some(state.into());
    }

    pub fn country(&self) -> Option<&str> {
        self.country.as_deref()
    }

    pub fn set_country(&mut self, country: impl Into<String>) {
        self.country = Some(country.into());
    }

    pub fn tags(&self) -> Option<&[String]> {
        self.tags.as_deref()
    }

    pub fn set_tags<I, S>(&mut self, tags: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = Some(tags.into_iter().map(Into::into).collect());
    }

    pub fn extra_emails(&self) -> Option<&[String]> {
        self.extra_emails.as_deref()
    }

    /// Replace the secondary emails.
    ///
    /// Every address is checked before anything is stored, so a single bad
    /// entry rejects the whole list.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidEmail` for the first malformed address.
    pub fn set_extra_emails<I, S>(&mut self, emails: I) -> Result<(), ValidationError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let emails: Vec<String> = emails.into_iter().map(Into::into).collect();
        for email in &emails {
            validate_email(email)?;
        }
        self.extra_emails = Some(emails);
        Ok(())
    }

    /// Whether the field matching the declared identifier kind is filled in.
    pub fn has_identifier_value(&self) -> bool {
        let value = match self.identifier {
            ContactIdentifier::Email => self.email.as_deref(),
            ContactIdentifier::Uuid => self.uuid.as_deref(),
        };
        value.is_some_and(|v| !v.is_empty())
    }

    /// Build the flat record sent to the API.
    ///
    /// The thirteen standard keys are always present, `null` when unset.
    /// Extra fields are laid over them and win on key collisions.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::EmptyIdentifier` when the identifier field is
    /// unset or empty.
    pub fn to_wire_record(&self) -> Result<WireRecord, ValidationError> {
        if !self.has_identifier_value() {
            return Err(ValidationError::EmptyIdentifier);
        }

        let mut record = Map::new();
        record.insert("uuid".into(), opt_string(&self.uuid));
        record.insert("name".into(), opt_string(&self.name));
        record.insert("email".into(), opt_string(&self.email));
        record.insert("job_title".into(), opt_string(&self.job_title));
        record.insert("bio".into(), opt_string(&self.bio));
        record.insert("website".into(), opt_string(&self.website));
        record.insert("linkedin".into(), opt_string(&self.linkedin));
        record.insert("personal_phone".into(), opt_string(&self.personal_phone));
        record.insert("city".into(), opt_string(&self.city));
        record.insert("state".into(), opt_string(&self.state));
        record.insert("country".into(), opt_string(&self.country));
        record.insert("tags".into(), opt_list(&self.tags));
        record.insert("extra_emails".into(), opt_list(&self.extra_emails));

        for (key, value) in &self.extra_fields {
            record.insert(key.clone(), value.clone());
        }

        Ok(record)
    }
}

fn opt_string(value: &Option<String>) -> Value {
    value.clone().map_or(Value::Null, Value::String)
}

fn opt_list(values: &Option<Vec<String>>) -> Value {
    values
        .as_ref()
        .map_or(Value::Null, |v| Value::from(v.clone()))
}

// Serializes as the wire record, so a contact without its identifier value
// cannot be posted.
impl Serialize for Contact {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_wire_record()
            .map_err(<S::Error as serde::ser::Error>::custom)?
            .serialize(serializer)
    }
}
