use std::fmt;

const AVATAR_BASE_URL: &str = "https://i.pravatar.cc/150";
const GENERATED_NAME_SUFFIX_LEN: usize = 4;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ContactId(String);

impl ContactId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ContactId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Contact {
    pub id: ContactId,
    pub display_name: String,
    pub photo_ref: String,
}

impl Contact {
    /// Builds a contact for a freshly generated id: the display name is taken
    /// from the id's last four characters and the avatar is keyed by the id.
    pub fn generated(id: ContactId) -> Self {
        let display_name = format!("Contact {}", id_suffix(id.as_str()));
        let photo_ref = format!("{AVATAR_BASE_URL}?u={}", id.as_str());

        Self {
            id,
            display_name,
            photo_ref,
        }
    }
}

fn id_suffix(id: &str) -> &str {
    let count = id.chars().count();
    if count <= GENERATED_NAME_SUFFIX_LEN {
        return id;
    }

    id.char_indices()
        .nth(count - GENERATED_NAME_SUFFIX_LEN)
        .map(|(byte_idx, _)| &id[byte_idx..])
        .unwrap_or(id)
}

/// Contacts known at startup when the config does not provide its own list.
pub fn default_seed() -> Vec<Contact> {
    ["Jaimin", "Shlok", "Myntra", "Zeel", "Laksh"]
        .iter()
        .enumerate()
        .map(|(index, name)| {
            let n = index + 1;
            Contact {
                id: ContactId::new(n.to_string()),
                display_name: (*name).to_owned(),
                photo_ref: format!("{AVATAR_BASE_URL}?img={n}"),
            }
        })
        .collect()
}

/// Insertion-ordered set of contacts. Contacts are never removed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactRegistry {
    contacts: Vec<Contact>,
}

impl ContactRegistry {
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }

    pub fn list(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn find(&self, id: &ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|contact| &contact.id == id)
    }

    pub fn contains(&self, id: &ContactId) -> bool {
        self.find(id).is_some()
    }

    /// Appends a generated contact. The caller supplies an id that is not
    /// already registered.
    pub fn add(&mut self, id: ContactId) -> Contact {
        let contact = Contact::generated(id);
        self.contacts.push(contact.clone());
        contact
    }
}
