use super::*;

/// Session-scoped, insertion-ordered contact list.
#[derive(Debug, Default)]
pub struct ContactStore {
    data: Vec<Contact>,
}

impl ContactStore {
    pub fn new() -> Self {
        Self { data: Vec::new() }
    }

    /// Validates the three fields and appends a new contact.
    ///
    /// Nothing is stored when any field is empty or blank. Duplicates are
    /// accepted as-is.
    pub fn add_contact(
        &mut self,
        first_name: &str,
        last_name: &str,
        phone_number: &str,
    ) -> Result<(), AppError> {
        let contact = match Contact::new(first_name, last_name, phone_number) {
            Ok(contact) => contact,
            Err(e) => {
                warn!(error = %e, "contact rejected");
                return Err(e);
            }
        };

        debug!(id = %contact.id(), size = self.data.len() + 1, "contact stored");
        self.data.push(contact);
        Ok(())
    }

    /// Read-only view of every contact in insertion order.
    pub fn all_contacts(&self) -> &[Contact] {
        &self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn last(&self) -> Option<&Contact> {
        self.data.last()
    }

    pub fn iter(&self) -> ContactIter<'_> {
        ContactIter {
            inner: &self.data,
            idx: 0,
        }
    }
}

pub struct ContactIter<'a> {
    inner: &'a [Contact],
    idx: usize,
}

impl<'a> Iterator for ContactIter<'a> {
    type Item = &'a Contact;

    fn next(&mut self) -> Option<Self::Item> {
        let contact = self.inner.get(self.idx)?;
        self.idx += 1;
        Some(contact)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.inner.len() - self.idx;
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for ContactIter<'_> {}

impl<'a> IntoIterator for &'a ContactStore {
    type Item = &'a Contact;
    type IntoIter = ContactIter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
