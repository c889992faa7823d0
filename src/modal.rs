/// Services that have a card on the site but can't be booked yet, with the
/// name the "coming soon" notice shows for them.
const COMING_SOON: &[(&str, &str)] = &[("Laundry", "Laundry Service")];

pub fn coming_soon_name(service: &str) -> Option<&'static str> {
    COMING_SOON
        .iter()
        .find(|(name, _)| *name == service)
        .map(|(_, display)| *display)
}

/// Which overlays a page has open, plus the service the booking form starts with.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ModalController {
    booking: bool,
    testimonial: bool,
    coming_soon: bool,
    selected_service: String,
}

impl ModalController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn booking_open(&self) -> bool {
        self.booking
    }

    pub fn testimonial_open(&self) -> bool {
        self.testimonial
    }

    pub fn coming_soon_open(&self) -> bool {
        self.coming_soon
    }

    pub fn selected_service(&self) -> &str {
        &self.selected_service
    }

    pub fn open_booking(&mut self, service: Option<&str>) {
        let service = service.map(str::trim).unwrap_or("");
        match coming_soon_name(service) {
            Some(display) => {
                self.selected_service = display.to_string();
                self.coming_soon = true;
            }
            None => {
                self.selected_service = service.to_string();
                self.booking = true;
            }
        }
    }

    pub fn close_booking(&mut self) {
        self.booking = false;
        self.selected_service.clear();
    }

    pub fn open_testimonial(&mut self) {
        self.testimonial = true;
    }

    pub fn close_testimonial(&mut self) {
        self.testimonial = false;
    }

    pub fn any_open(&self) -> bool {
        self.booking || self.testimonial || self.coming_soon
    }
}
