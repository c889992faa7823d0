use std::borrow::Borrow;

use actix_web::{http::header, http::StatusCode, web, HttpRequest, HttpResponse};
use askama::Template;
use chrono::Local;
use serde::Deserialize;

use crate::{
    animation::{Sequencer, Timeline},
    carousel::{Carousel, Slide},
    filters,
    forms::{attempt_id, FormSession},
    modal::ModalController,
    models::{
        contact_faqs, fallback_testimonials, home_faqs, home_service_cards, options,
        service_categories, trust_stats, BookingRequest, ContactMessage, Faq, ServiceCard,
        ServiceCategory, ServiceOption, Stat, Testimonial, TestimonialDraft, BOOKABLE_SERVICES,
        CONTACT_SERVICES, MAX_RATING, MIN_RATING, PROPERTY_TYPES,
    },
    router::{Resolution, Route},
    state::AppState,
    templates::{render, render_with_status, Notice},
    validate::{validate_booking, validate_contact, validate_testimonial},
};

#[derive(Clone, Debug)]
pub struct NavLink {
    pub path: &'static str,
    pub title: &'static str,
    pub active: bool,
}

#[derive(Clone, Debug)]
pub struct RatingOption {
    pub value: u8,
    pub checked: bool,
}

/// Chrome shared by every page: header, notice, the three overlays and
/// their forms, and the reveal timelines for the page's sections.
#[derive(Debug)]
pub struct Shell {
    pub route: Route,
    pub modals: ModalController,
    pub booking: FormSession<BookingRequest>,
    pub testimonial: FormSession<TestimonialDraft>,
    pub notice: Option<Notice>,
    pub reveals: Sequencer,
    pub today: String,
}

impl Shell {
    pub fn new(route: Route) -> Self {
        Self {
            route,
            modals: ModalController::new(),
            booking: FormSession::new(BookingRequest::default()),
            testimonial: FormSession::new(TestimonialDraft {
                rating: MAX_RATING,
                ..Default::default()
            }),
            notice: None,
            reveals: reveals_for(route),
            today: Local::now().format("%Y-%m-%d").to_string(),
        }
    }

    /// Opens booking pre-filled with `service`, unless the service is not bookable yet.
    pub fn open_booking(&mut self, service: Option<&str>) {
        self.modals.open_booking(service);
        if self.modals.booking_open() {
            self.booking.values.service_type = self.modals.selected_service().to_string();
        }
    }

    pub fn nav(&self) -> Vec<NavLink> {
        [Route::Home, Route::About, Route::Services, Route::Contact]
            .into_iter()
            .map(|route| NavLink {
                path: route.path(),
                title: route.title(),
                active: route == self.route,
            })
            .collect()
    }

    pub fn has_notice(&self) -> bool {
        self.notice.is_some()
    }

    pub fn notice_class(&self) -> &str {
        self.notice.as_ref().map(Notice::css_class).unwrap_or("")
    }

    pub fn notice_title(&self) -> &str {
        self.notice.as_ref().map(|n| n.title.as_str()).unwrap_or("")
    }

    pub fn notice_description(&self) -> &str {
        self.notice
            .as_ref()
            .map(|n| n.description.as_str())
            .unwrap_or("")
    }

    pub fn service_options(&self) -> Vec<ServiceOption> {
        let selected = self.booking.values.service_type.as_str();
        let mut list = options(BOOKABLE_SERVICES, selected);
        // A preselection from outside the list still has to show up as chosen.
        if !selected.is_empty() && !list.iter().any(|option| option.selected) {
            list.push(ServiceOption {
                name: selected.to_string(),
                selected: true,
            });
        }
        list
    }

    pub fn property_options(&self) -> Vec<ServiceOption> {
        options(PROPERTY_TYPES, &self.booking.values.property_type)
    }

    pub fn rating_options(&self) -> Vec<RatingOption> {
        (MIN_RATING..=MAX_RATING)
            .map(|value| RatingOption {
                value,
                checked: value == self.testimonial.values.rating,
            })
            .collect()
    }

    pub fn reveal(&self, section: &str, target: &str) -> String {
        self.reveals.reveal_attrs(section, target)
    }

    pub fn reveal_at(&self, section: &str, index: impl Borrow<usize>) -> String {
        self.reveals
            .reveal_attrs(section, &index.borrow().to_string())
    }

    pub fn booking_action(&self) -> String {
        format!("/book?page={}", self.route.path())
    }

    pub fn testimonial_action(&self) -> String {
        format!("/testimonials?page={}", self.route.path())
    }
}

fn reveals_for(route: Route) -> Sequencer {
    let mut reveals = Sequencer::new();
    reveals.register(
        Timeline::staggered("hero", ["badge", "title", "lead", "actions"], 150).starting_at(0.9),
    );
    match route {
        Route::Home => {
            reveals.register(Timeline::staggered("trust", ["0", "1", "2", "3"], 120));
            reveals.register(Timeline::staggered("services", ["0", "1", "2", "3", "4"], 100));
            reveals.register(Timeline::staggered("testimonials", ["heading", "card"], 200));
            reveals.register(Timeline::staggered("faq", ["0", "1", "2", "3", "4"], 80));
            reveals.register(
                Timeline::staggered("cta", ["title", "actions"], 150).starting_at(0.8),
            );
        }
        Route::About => {
            reveals.register(Timeline::staggered("story", ["text", "stats"], 200));
            reveals.register(Timeline::staggered("pillars", ["0", "1", "2"], 120));
        }
        Route::Services => {
            reveals.register(Timeline::staggered("categories", ["0", "1", "2", "3"], 150));
        }
        Route::Contact => {
            reveals.register(Timeline::staggered("contact", ["info", "form"], 150));
            reveals.register(Timeline::staggered("faq", ["0", "1", "2"], 80));
        }
        Route::NotFound => {}
    }
    reveals
}

#[derive(Clone, Debug)]
pub struct Dot {
    pub index: usize,
    pub number: usize,
    pub active: bool,
}

/// The home page's testimonial slider for one render.
#[derive(Clone, Debug, Default)]
pub struct CarouselView {
    pub has_slide: bool,
    pub slide: Slide,
    pub dots: Vec<Dot>,
    pub prev: usize,
    pub next: usize,
    pub live: bool,
    /// Key the live stream claims this render's list with. Empty when not live.
    pub feed: String,
}

impl CarouselView {
    pub fn from_carousel(carousel: &Carousel<Testimonial>) -> Self {
        let Some(slide) = carousel.slide() else {
            return Self::default();
        };

        let mut prev = carousel.clone();
        prev.prev();
        let mut next = carousel.clone();
        next.next();

        Self {
            has_slide: true,
            dots: (0..carousel.len())
                .map(|index| Dot {
                    index,
                    number: index + 1,
                    active: index == carousel.index(),
                })
                .collect(),
            prev: prev.index(),
            next: next.index(),
            live: carousel.auto_advance() && carousel.len() > 1,
            feed: String::new(),
            slide,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Pillar {
    pub title: &'static str,
    pub body: &'static str,
}

#[derive(Clone, Debug)]
pub struct ContactInfo {
    pub title: &'static str,
    pub value: &'static str,
    pub link: &'static str,
}

#[derive(Template)]
#[template(path = "home.html")]
struct HomeTemplate {
    shell: Shell,
    stats: Vec<Stat>,
    cards: Vec<ServiceCard>,
    faqs: Vec<Faq>,
    carousel: CarouselView,
}

#[derive(Template)]
#[template(path = "about.html")]
struct AboutTemplate {
    shell: Shell,
    stats: Vec<Stat>,
    pillars: Vec<Pillar>,
}

#[derive(Template)]
#[template(path = "services.html")]
struct ServicesTemplate {
    shell: Shell,
    categories: Vec<ServiceCategory>,
}

#[derive(Template)]
#[template(path = "contact.html")]
struct ContactTemplate {
    shell: Shell,
    contact: FormSession<ContactMessage>,
    contact_services: Vec<ServiceOption>,
    info: Vec<ContactInfo>,
    faqs: Vec<Faq>,
}

#[derive(Template)]
#[template(path = "not_found.html")]
struct NotFoundTemplate {
    shell: Shell,
}

/// Everything needed to render one page.
#[derive(Debug)]
pub struct Page {
    pub shell: Shell,
    pub contact: FormSession<ContactMessage>,
    pub slide: Option<usize>,
}

impl Page {
    pub fn new(route: Route) -> Self {
        Self {
            shell: Shell::new(route),
            contact: FormSession::new(ContactMessage::default()),
            slide: None,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    book: Option<String>,
    share: Option<String>,
    slide: Option<String>,
}

impl PageQuery {
    fn apply(&self, page: &mut Page) {
        if let Some(service) = self.book.as_deref() {
            page.shell.open_booking(Some(service));
        }
        if self.share.is_some() {
            page.shell.modals.open_testimonial();
        }
        page.slide = self
            .slide
            .as_deref()
            .and_then(|value| value.trim().parse().ok());
    }
}

#[derive(Debug, Default, Deserialize)]
struct Origin {
    page: Option<String>,
}

impl Origin {
    fn route(&self) -> Route {
        Route::from_form(self.page.as_deref().unwrap_or("/"))
    }
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct TestimonialForm {
    name: String,
    role: String,
    content: String,
    rating: String,
}

impl TestimonialForm {
    fn into_draft(self) -> TestimonialDraft {
        TestimonialDraft {
            name: self.name,
            role: self.role,
            content: self.content,
            rating: self.rating.trim().parse().unwrap_or(0),
        }
    }
}

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(home)))
        .service(web::resource("/about").route(web::get().to(about)))
        .service(web::resource("/services").route(web::get().to(services)))
        .service(
            web::resource("/contact")
                .route(web::get().to(contact))
                .route(web::post().to(send_contact)),
        )
        .service(web::resource("/404").route(web::get().to(not_found)))
        .service(web::resource("/book").route(web::post().to(create_booking)))
        .service(web::resource("/testimonials").route(web::post().to(create_testimonial)))
        .service(web::resource("/health").route(web::get().to(health)));
}

async fn health() -> HttpResponse {
    HttpResponse::Ok().body("ok")
}

/// Default service: every path that isn't a page goes to the closest one, usually home.
pub async fn fallback(req: HttpRequest) -> HttpResponse {
    let target = match Route::resolve(req.path()) {
        Resolution::Page(route) | Resolution::Redirect(route) => route,
    };
    HttpResponse::SeeOther()
        .append_header((header::LOCATION, target.path()))
        .finish()
}

async fn home(state: web::Data<AppState>, query: web::Query<PageQuery>) -> HttpResponse {
    show(&state, Route::Home, &query).await
}

async fn about(state: web::Data<AppState>, query: web::Query<PageQuery>) -> HttpResponse {
    show(&state, Route::About, &query).await
}

async fn services(state: web::Data<AppState>, query: web::Query<PageQuery>) -> HttpResponse {
    show(&state, Route::Services, &query).await
}

async fn contact(state: web::Data<AppState>, query: web::Query<PageQuery>) -> HttpResponse {
    show(&state, Route::Contact, &query).await
}

async fn not_found(state: web::Data<AppState>, query: web::Query<PageQuery>) -> HttpResponse {
    show(&state, Route::NotFound, &query).await
}

async fn show(state: &AppState, route: Route, query: &PageQuery) -> HttpResponse {
    let mut page = Page::new(route);
    query.apply(&mut page);
    render_page(state, page).await
}

pub async fn render_page(state: &AppState, page: Page) -> HttpResponse {
    let Page {
        shell,
        contact,
        slide,
    } = page;

    let route = shell.route;
    match route {
        Route::Home => {
            let fallback = fallback_testimonials();
            let mut carousel = Carousel::new(fallback.clone());
            let loaded = state.store.load_or_fallback(fallback).await;
            carousel.replace_items(loaded.clone());
            if let Some(index) = slide {
                carousel.jump_to(index);
            }
            let mut view = CarouselView::from_carousel(&carousel);
            if view.live {
                view.feed = state.feeds.park(loaded);
            }
            render(HomeTemplate {
                shell,
                stats: trust_stats(),
                cards: home_service_cards(),
                faqs: home_faqs(),
                carousel: view,
            })
        }
        Route::About => render(AboutTemplate {
            shell,
            stats: trust_stats(),
            pillars: about_pillars(),
        }),
        Route::Services => render(ServicesTemplate {
            shell,
            categories: service_categories(),
        }),
        Route::Contact => {
            let contact_services = options(CONTACT_SERVICES, &contact.values.service);
            render(ContactTemplate {
                shell,
                contact,
                contact_services,
                info: contact_info(),
                faqs: contact_faqs(),
            })
        }
        Route::NotFound => render_with_status(NotFoundTemplate { shell }, StatusCode::NOT_FOUND),
    }
}

async fn create_booking(
    state: web::Data<AppState>,
    origin: web::Query<Origin>,
    form: web::Form<BookingRequest>,
) -> HttpResponse {
    let mut page = Page::new(origin.route());
    page.shell.open_booking(None);

    let mut session = FormSession::new(form.into_inner());
    if !session.validate(validate_booking) {
        page.shell.booking = session;
        return render_page(&state, page).await;
    }

    if session.begin_submit() {
        let attempt = attempt_id();
        log::info!(
            "Booking attempt {attempt}: {} for {}",
            session.values.service_type,
            session.values.full_name
        );
        match state.booking_relay.submit(&session.values).await {
            Ok(()) => {
                session.succeed(Notice::success(
                    "Booking Request Submitted!",
                    "We'll contact you within 24 hours to confirm your appointment.",
                ));
                page.shell.modals.close_booking();
            }
            Err(err) => {
                log::warn!(
                    "Booking attempt {attempt} to {} failed: {err}",
                    state.booking_relay.endpoint()
                );
                session.fail(Notice::error("Submission failed", "Please try again later."));
            }
        }
    }

    page.shell.notice = session.notice.clone();
    page.shell.booking = session;
    render_page(&state, page).await
}

async fn send_contact(
    state: web::Data<AppState>,
    form: web::Form<ContactMessage>,
) -> HttpResponse {
    let mut page = Page::new(Route::Contact);

    let mut session = FormSession::new(form.into_inner());
    if !session.validate(validate_contact) {
        page.contact = session;
        return render_page(&state, page).await;
    }

    if session.begin_submit() {
        let attempt = attempt_id();
        log::info!("Contact attempt {attempt} from {}", session.values.name);
        match state.contact_relay.submit(&session.values).await {
            Ok(()) => session.succeed(Notice::success(
                "Message Sent!",
                "We'll get back to you within 24 hours.",
            )),
            Err(err) => {
                log::warn!(
                    "Contact attempt {attempt} to {} failed: {err}",
                    state.contact_relay.endpoint()
                );
                session.fail(Notice::error("Submission failed", "Please try again later."));
            }
        }
    }

    page.shell.notice = session.notice.clone();
    page.contact = session;
    render_page(&state, page).await
}

async fn create_testimonial(
    state: web::Data<AppState>,
    origin: web::Query<Origin>,
    form: web::Form<TestimonialForm>,
) -> HttpResponse {
    let mut page = Page::new(origin.route());
    page.shell.modals.open_testimonial();

    let mut session = FormSession::new(form.into_inner().into_draft());
    if !session.validate(validate_testimonial) {
        page.shell.testimonial = session;
        return render_page(&state, page).await;
    }

    if session.begin_submit() {
        let attempt = attempt_id();
        log::info!("Testimonial attempt {attempt} from {}", session.values.name.trim());
        match state.store.insert(&session.values).await {
            Ok(()) => {
                session.succeed(Notice::success(
                    "Thank you!",
                    "Your testimonial has been submitted and is pending review.",
                ));
                session.values.rating = MAX_RATING;
                page.shell.modals.close_testimonial();
            }
            Err(err) => {
                log::warn!("Testimonial attempt {attempt} failed: {err}");
                session.fail(Notice::error("Submission failed", "Please try again later."));
            }
        }
    }

    page.shell.notice = session.notice.clone();
    page.shell.testimonial = session;
    render_page(&state, page).await
}

fn about_pillars() -> Vec<Pillar> {
    vec![
        Pillar {
            title: "Excellence",
            body: "Every job gets a final walkthrough before we call it done.",
        },
        Pillar {
            title: "Integrity",
            body: "Clear quotes, insured technicians, and no surprises on the invoice.",
        },
        Pillar {
            title: "Sustainability",
            body: "Eco-friendly products that are safe for families, pets, and the planet.",
        },
    ]
}

fn contact_info() -> Vec<ContactInfo> {
    vec![
        ContactInfo {
            title: "Phone",
            value: "+234-916-019-8122",
            link: "tel:+2349160198122",
        },
        ContactInfo {
            title: "Email",
            value: "lucidintegratedservices@gmail.com",
            link: "mailto:lucidintegratedservices@gmail.com",
        },
        ContactInfo {
            title: "Location",
            value: "Surulere, Lagos, Nigeria",
            link: "https://maps.google.com/?q=Surulere,Lagos,Nigeria",
        },
        ContactInfo {
            title: "Business Hours",
            value: "Mon - Sat: 8AM - 6PM",
            link: "",
        },
    ]
}
