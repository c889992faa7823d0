use std::{
    pin::Pin,
    sync::{Arc, Mutex},
    task::{Context, Poll},
    time::Duration,
};

use actix_web::{http::header, web, HttpResponse};
use serde::Deserialize;
use tokio::sync::mpsc;
use tokio_stream::{Stream, StreamExt};

use crate::{
    carousel::{AutoAdvance, Carousel, SharedCarousel, Slide},
    models::Testimonial,
    state::AppState,
};

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/testimonials/stream").route(web::get().to(stream_slides)));
}

#[derive(Debug, Deserialize)]
struct FeedQuery {
    feed: Option<String>,
}

/// Slides pushed by one connection's auto-advance timer. The timer lives
/// as long as the feed, so a closed connection stops it.
struct SlideFeed {
    slides: mpsc::UnboundedReceiver<Slide>,
    _timer: AutoAdvance,
}

impl SlideFeed {
    fn start(carousel: SharedCarousel<Testimonial>, every: Duration) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        let timer = AutoAdvance::spawn(carousel, every, move |carousel| match carousel.slide() {
            Some(slide) => tx.send(slide).is_ok(),
            None => false,
        });
        Self {
            slides: rx,
            _timer: timer,
        }
    }
}

impl Stream for SlideFeed {
    type Item = Slide;

    fn poll_next(mut self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Option<Slide>> {
        self.slides.poll_recv(cx)
    }
}

/// Rotates the list the home page parked for this connection. Unknown or
/// already claimed keys get `204`, which tells `EventSource` to stop.
async fn stream_slides(state: web::Data<AppState>, query: web::Query<FeedQuery>) -> HttpResponse {
    let Some(items) = query.feed.as_deref().and_then(|key| state.feeds.claim(key)) else {
        return HttpResponse::NoContent().finish();
    };

    let carousel = Carousel::new(items);
    let first = carousel.slide();
    let feed = SlideFeed::start(Arc::new(Mutex::new(carousel)), state.config.carousel_interval);

    let stream = tokio_stream::iter(first)
        .chain(feed)
        .map(|slide| Ok::<web::Bytes, actix_web::Error>(slide_to_bytes(&slide)));

    HttpResponse::Ok()
        .insert_header((header::CONTENT_TYPE, "text/event-stream"))
        .insert_header((header::CACHE_CONTROL, "no-cache"))
        .streaming(stream)
}

fn slide_to_bytes(slide: &Slide) -> web::Bytes {
    let payload = serde_json::to_string(slide).unwrap_or_else(|_| "{}".to_string());
    web::Bytes::from(format!("event: slide\ndata: {payload}\n\n"))
}
