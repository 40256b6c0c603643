//! In-memory employee storage.
//!
//! Each store owns its own id counter. An entity saved with id 0 receives the
//! next counter value; an entity saved with a non-zero id is upserted at that
//! id without any collision check.

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::models::StaffMember;

/// Storage for staff members keyed by integer id.
pub trait EmployeeStore {
    /// Saves `member`, assigning an id first if it has none. Returns the id.
    fn save(&mut self, member: StaffMember) -> u32;

    /// Returns every stored member in insertion order.
    fn list_all(&self) -> Vec<&StaffMember>;

    /// Looks up a member by id.
    fn get(&self, id: u32) -> Option<&StaffMember>;

    /// Looks up a member by id for mutation.
    fn get_mut(&mut self, id: u32) -> Option<&mut StaffMember>;

    /// Returns the number of stored members.
    fn len(&self) -> usize {
        self.list_all().len()
    }

    /// Returns true if nothing is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// An [`EmployeeStore`] backed by a vector plus an id index.
///
/// The vector keeps insertion order. Overwriting an id keeps the slot of the
/// member it replaces.
#[derive(Debug, Clone)]
pub struct MemoryStore {
    members: Vec<StaffMember>,
    index: HashMap<u32, usize>,
    next_id: u32,
}

impl MemoryStore {
    /// Creates an empty store whose first assigned id is 1.
    pub fn new() -> Self {
        Self {
            members: Vec::new(),
            index: HashMap::new(),
            next_id: 1,
        }
    }

    fn upsert(&mut self, id: u32, member: StaffMember) {
        match self.index.get(&id) {
            Some(&slot) => {
                warn!(id, name = %member.name(), "Overwriting stored employee");
                self.members[slot] = member;
            }
            None => {
                self.index.insert(id, self.members.len());
                self.members.push(member);
            }
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl EmployeeStore for MemoryStore {
    fn save(&mut self, mut member: StaffMember) -> u32 {
        let id = if member.id() == 0 {
            let id = self.next_id;
            member.assign_id(id);
            self.next_id += 1;
            id
        } else {
            member.id()
        };

        debug!(id, name = %member.name(), "Saving employee");
        self.upsert(id, member);
        id
    }

    fn list_all(&self) -> Vec<&StaffMember> {
        self.members.iter().collect()
    }

    fn get(&self, id: u32) -> Option<&StaffMember> {
        self.index.get(&id).map(|&slot| &self.members[slot])
    }

    fn get_mut(&mut self, id: u32) -> Option<&mut StaffMember> {
        match self.index.get(&id) {
            Some(&slot) => self.members.get_mut(slot),
            None => None,
        }
    }

    fn len(&self) -> usize {
        self.members.len()
    }
}
