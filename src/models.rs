use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub const DEFAULT_ROLE: &str = "Customer";
pub const MIN_RATING: u8 = 1;
pub const MAX_RATING: u8 = 5;

pub const NAME_MAX: usize = 100;
pub const ROLE_MAX: usize = 100;
pub const CONTENT_MAX: usize = 500;

/// An approved testimonial, ready to show. `rating` is always within
/// `MIN_RATING..=MAX_RATING`.
#[derive(Debug, Clone, PartialEq)]
pub struct Testimonial {
    pub id: String,
    pub name: String,
    pub role: String,
    pub content: String,
    pub rating: u8,
    pub created_at: DateTime<Utc>,
}

/// A new testimonial as the visitor typed it. The store marks it pending.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TestimonialDraft {
    pub name: String,
    pub role: String,
    pub content: String,
    pub rating: u8,
}

impl TestimonialDraft {
    pub fn normalized(&self) -> Self {
        let role = self.role.trim();
        Self {
            name: self.name.trim().to_string(),
            role: if role.is_empty() {
                DEFAULT_ROLE.to_string()
            } else {
                role.to_string()
            },
            content: self.content.trim().to_string(),
            rating: self.rating.clamp(MIN_RATING, MAX_RATING),
        }
    }
}

/// Relay payload for the booking modal. Keys match what the relay inbox expects.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BookingRequest {
    pub full_name: String,
    pub email: String,
    pub phone: String,
    pub service_type: String,
    pub property_type: String,
    pub preferred_date: String,
    pub preferred_time: String,
    pub notes: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    pub message: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ServiceOption {
    pub name: String,
    pub selected: bool,
}

#[derive(Debug, Clone, Copy)]
pub struct ServiceCard {
    pub title: &'static str,
    pub description: &'static str,
    /// Name handed to the booking controller when the card is clicked.
    pub book_as: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ServiceDetail {
    pub name: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct ServiceCategory {
    pub title: &'static str,
    pub description: &'static str,
    pub services: &'static [ServiceDetail],
}

#[derive(Debug, Clone, Copy)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Stat {
    pub value: &'static str,
    pub label: &'static str,
}

pub const BOOKABLE_SERVICES: &[&str] = &[
    "Post-Construction Cleaning",
    "Deep Cleaning",
    "Upholstery Cleaning",
    "Laundry Services",
    "Fumigation",
    "General Maintenance",
    "HVAC Services",
    "Electrical & Plumbing",
    "Pest Control",
    "Gardening & Landscaping",
    "Interior Design",
    "Space Planning",
];

pub const PROPERTY_TYPES: &[&str] = &[
    "Residential",
    "Commercial",
    "Industrial",
    "Office",
    "Retail",
    "Other",
];

pub const CONTACT_SERVICES: &[&str] = &[
    "Post-Construction Cleaning",
    "Deep Cleaning",
    "Fumigation",
    "General Maintenance",
    "Interior Design",
    "Other",
];

/// Marks which entry of `names` is currently chosen, for `<select>` rendering.
pub fn options(names: &[&str], selected: &str) -> Vec<ServiceOption> {
    names
        .iter()
        .map(|&name| ServiceOption {
            name: name.to_string(),
            selected: name == selected,
        })
        .collect()
}

pub fn home_service_cards() -> Vec<ServiceCard> {
    vec![
        ServiceCard {
            title: "Post-Construction",
            description: "Complete cleaning solutions for newly built or renovated spaces. We handle debris, dust, and finishing touches.",
            book_as: "Post-Construction Cleaning",
        },
        ServiceCard {
            title: "Fumigation",
            description: "Professional pest control and fumigation services to keep your property safe and pest-free.",
            book_as: "Fumigation",
        },
        ServiceCard {
            title: "Maintenance",
            description: "General maintenance, HVAC, electrical, plumbing, and landscaping services under one roof.",
            book_as: "General Maintenance",
        },
        ServiceCard {
            title: "Interiors & Design",
            description: "Transform your space with our interior design, space planning, and furniture selection services.",
            book_as: "Interior Design",
        },
        ServiceCard {
            title: "Laundry",
            description: "Washing, drying, ironing, and folding for homes and businesses.",
            book_as: "Laundry",
        },
    ]
}

pub fn service_categories() -> Vec<ServiceCategory> {
    vec![
        ServiceCategory {
            title: "Post-Construction",
            description: "Complete cleaning solutions for newly built or renovated spaces.",
            services: &[
                ServiceDetail {
                    name: "Post-Construction Cleaning",
                    description: "Thorough removal of construction debris, dust, and residue. We ensure your new space is move-in ready.",
                },
                ServiceDetail {
                    name: "Deep Cleaning",
                    description: "Intensive cleaning that goes beyond regular maintenance.",
                },
                ServiceDetail {
                    name: "Upholstery Cleaning",
                    description: "Professional cleaning for furniture, curtains, and fabric surfaces.",
                },
                ServiceDetail {
                    name: "Laundry Services",
                    description: "Washing, drying, ironing, and folding for residential and commercial clients.",
                },
            ],
        },
        ServiceCategory {
            title: "Fumigation",
            description: "Professional pest control for a safe and healthy environment.",
            services: &[ServiceDetail {
                name: "Fumigation",
                description: "Full-spectrum pest control targeting all types of pests, with lasting results.",
            }],
        },
        ServiceCategory {
            title: "Maintenance",
            description: "Keep your property in perfect condition with our maintenance services.",
            services: &[
                ServiceDetail {
                    name: "General Maintenance",
                    description: "Routine maintenance and repairs, from minor fixes to preventive care.",
                },
                ServiceDetail {
                    name: "HVAC Services",
                    description: "Heating, ventilation, and air conditioning maintenance and repair.",
                },
                ServiceDetail {
                    name: "Electrical & Plumbing",
                    description: "Licensed electrical and plumbing work for homes and offices.",
                },
                ServiceDetail {
                    name: "Pest Control",
                    description: "Scheduled treatments that keep pests from coming back.",
                },
                ServiceDetail {
                    name: "Gardening & Landscaping",
                    description: "Lawn care, planting, and outdoor upkeep.",
                },
            ],
        },
        ServiceCategory {
            title: "Interiors & Branding",
            description: "Spaces planned and finished to fit how you live and work.",
            services: &[
                ServiceDetail {
                    name: "Space Planning",
                    description: "Layouts that make the most of every square metre.",
                },
                ServiceDetail {
                    name: "Interior Design",
                    description: "Complete interior design from concept to installation.",
                },
            ],
        },
    ]
}

pub fn home_faqs() -> Vec<Faq> {
    vec![
        Faq {
            question: "What areas do you serve?",
            answer: "We currently serve the metropolitan area and surrounding suburbs. Contact us to check if we service your location.",
        },
        Faq {
            question: "Are your cleaning products eco-friendly?",
            answer: "Yes. We use only eco-friendly, non-toxic cleaning products that are safe for your family, pets, and the environment.",
        },
        Faq {
            question: "How do I book a service?",
            answer: "Use our online booking form, call us directly, or send us an email. We respond within 24 hours to confirm.",
        },
        Faq {
            question: "Do you offer recurring services?",
            answer: "We offer weekly, bi-weekly, and monthly maintenance plans at discounted rates.",
        },
        Faq {
            question: "Are your technicians insured?",
            answer: "All our technicians are fully insured and bonded, and background checked.",
        },
    ]
}

pub fn contact_faqs() -> Vec<Faq> {
    vec![
        Faq {
            question: "How quickly can you respond to booking requests?",
            answer: "We typically respond within 24 hours. For urgent requests, call us directly.",
        },
        Faq {
            question: "Do you provide services on weekends?",
            answer: "Yes, by appointment. Please book at least 48 hours in advance for weekend slots.",
        },
        Faq {
            question: "Can I get a quote before booking?",
            answer: "Fill out the contact form with your requirements and we will send a detailed quote within 24 hours.",
        },
    ]
}

pub fn trust_stats() -> Vec<Stat> {
    vec![
        Stat {
            value: "500+",
            label: "Happy Clients",
        },
        Stat {
            value: "10+",
            label: "Years Experience",
        },
        Stat {
            value: "24/7",
            label: "Support Available",
        },
        Stat {
            value: "99%",
            label: "Satisfaction Rate",
        },
    ]
}

/// Shown until the hosted store answers, and kept when it doesn't.
pub fn fallback_testimonials() -> Vec<Testimonial> {
    let seeds = [
        (
            "Sarah Johnson",
            "Homeowner",
            "Lucid transformed our newly built home into a spotless sanctuary. Their attention to detail is unmatched, and the eco-friendly approach gave us peace of mind.",
        ),
        (
            "Michael Chen",
            "Property Manager",
            "Managing multiple properties is challenging, but Lucid's maintenance team makes it effortless. Reliable, professional, and always on time.",
        ),
        (
            "Emily Rodriguez",
            "Business Owner",
            "Our office has never looked better. The team at Lucid understands the importance of a clean workspace for productivity. Highly recommend!",
        ),
        (
            "David Okonkwo",
            "Restaurant Owner",
            "The fumigation service was thorough and effective. Six months later, still no pest issues. Great follow-up service too!",
        ),
    ];

    seeds
        .iter()
        .enumerate()
        .map(|(index, (name, role, content))| Testimonial {
            id: format!("fallback-{}", index + 1),
            name: name.to_string(),
            role: role.to_string(),
            content: content.to_string(),
            rating: MAX_RATING,
            created_at: DateTime::<Utc>::UNIX_EPOCH,
        })
        .collect()
}
