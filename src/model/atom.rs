use super::types;

#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub atomic_number: u8,
    pub position_3d: Option<[f64; 3]>,
    pub position_2d: Option<[f64; 2]>,
}

impl Atom {
    pub fn new(atomic_number: u8) -> Self {
        Self {
            atomic_number,
            position_3d: None,
            position_2d: None,
        }
    }

    pub fn with_position_3d(mut self, position: [f64; 3]) -> Self {
        self.position_3d = Some(position);
        self
    }

    pub fn with_position_2d(mut self, position: [f64; 2]) -> Self {
        self.position_2d = Some(position);
        self
    }

    #[inline]
    pub fn symbol(&self) -> Option<&'static str> {
        types::element_symbol(self.atomic_number)
    }
}
