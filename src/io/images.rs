// src/io/images.rs
//
// Auxiliary pictures for the detail window. Loading happens asynchronously in
// the UI; this module only names the URLs and fences stale requests.

use std::cell::Cell;

pub const ELEMENT_IMAGE_HOST: &str = "https://images-of-elements.com";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementImages {
    pub bohr: Option<String>,
    pub element: Option<String>,
}

/// "Rutherfordium" -> ".../rutherfordium.jpg". Every whitespace run becomes
/// one '-', including runs at either end of the name.
pub fn element_image_url(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut in_space = false;
    for c in name.to_lowercase().chars() {
        if c.is_whitespace() {
            if !in_space {
                slug.push('-');
            }
            in_space = true;
        } else {
            slug.push(c);
            in_space = false;
        }
    }
    format!("{}/{}.jpg", ELEMENT_IMAGE_HOST, slug)
}

/// Identifies one image request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    generation: u64,
    pub atomic_number: u32,
}

/// Hands out tickets for image requests. Only the most recent ticket is
/// current; results carrying an older ticket belong to an element the user
/// has already moved away from and must be dropped.
#[derive(Debug, Default)]
pub struct RequestFence {
    generation: Cell<u64>,
}

impl RequestFence {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn begin(&self, atomic_number: u32) -> Ticket {
        let generation = self.generation.get().wrapping_add(1);
        self.generation.set(generation);
        Ticket {
            generation,
            atomic_number,
        }
    }

    /// Invalidates every outstanding ticket (detail window closed).
    pub fn cancel(&self) {
        self.generation.set(self.generation.get().wrapping_add(1));
    }

    pub fn is_current(&self, ticket: &Ticket) -> bool {
        ticket.generation == self.generation.get()
    }
}
