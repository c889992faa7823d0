//! Testimonial rotation.
//!
//! [`Carousel`] is the cursor over the current item list. The index is
//! fixed up in the same call that swaps the list, so whatever reads the
//! carousel next sees a valid index (or an empty carousel). [`AutoAdvance`]
//! is the repeating timer that belongs to one carousel instance.

use std::{
    sync::{Arc, Mutex, PoisonError},
    time::Duration,
};

use serde::Serialize;
use tokio::{task::JoinHandle, time};

use crate::models::Testimonial;

#[derive(Debug, Clone)]
pub struct Carousel<T> {
    items: Vec<T>,
    index: usize,
    auto_advance: bool,
}

impl<T> Carousel<T> {
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items,
            index: 0,
            auto_advance: true,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn auto_advance(&self) -> bool {
        self.auto_advance
    }

    pub fn current(&self) -> Option<&T> {
        self.items.get(self.index)
    }

    pub fn next(&mut self) {
        self.auto_advance = false;
        self.forward();
    }

    pub fn prev(&mut self) {
        self.auto_advance = false;
        if !self.items.is_empty() {
            self.index = (self.index + self.items.len() - 1) % self.items.len();
        }
    }

    pub fn jump_to(&mut self, index: usize) {
        self.auto_advance = false;
        self.index = index.min(self.items.len().saturating_sub(1));
    }

    /// The timer's `Next`. Does nothing once manual navigation has happened.
    pub fn tick(&mut self) -> bool {
        if !self.auto_advance || self.items.is_empty() {
            return false;
        }
        self.forward();
        true
    }

    pub fn replace_items(&mut self, items: Vec<T>) {
        self.index = self.index.min(items.len().saturating_sub(1));
        self.items = items;
    }

    fn forward(&mut self) {
        if !self.items.is_empty() {
            self.index = (self.index + 1) % self.items.len();
        }
    }
}

/// What the page and the live stream show for the active testimonial.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Slide {
    pub index: usize,
    pub total: usize,
    pub name: String,
    pub role: String,
    pub content: String,
    pub rating: u8,
}

impl Carousel<Testimonial> {
    pub fn slide(&self) -> Option<Slide> {
        self.current().map(|item| Slide {
            index: self.index,
            total: self.items.len(),
            name: item.name.clone(),
            role: item.role.clone(),
            content: item.content.clone(),
            rating: item.rating,
        })
    }
}

pub type SharedCarousel<T> = Arc<Mutex<Carousel<T>>>;

/// Auto-advance timer for one carousel. Aborted on drop.
#[derive(Debug)]
pub struct AutoAdvance {
    handle: JoinHandle<()>,
}

impl AutoAdvance {
    /// Ticks `carousel` every `every` and hands it to `on_slide` after each move.
    /// The task ends when `on_slide` returns false, auto-advance is switched
    /// off, or there is nothing to rotate.
    pub fn spawn<T, F>(carousel: SharedCarousel<T>, every: Duration, mut on_slide: F) -> Self
    where
        T: Send + 'static,
        F: FnMut(&Carousel<T>) -> bool + Send + 'static,
    {
        let handle = tokio::spawn(async move {
            let mut ticker = time::interval_at(time::Instant::now() + every, every);
            loop {
                ticker.tick().await;
                let mut state = carousel.lock().unwrap_or_else(PoisonError::into_inner);
                if !state.auto_advance() || state.is_empty() {
                    break;
                }
                if state.tick() && !on_slide(&state) {
                    break;
                }
            }
        });
        Self { handle }
    }
}

impl Drop for AutoAdvance {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::mpsc;

    fn check_bounds(c: &Carousel<u32>) {
        if c.is_empty() {
            assert_eq!(c.index(), 0);
            assert!(c.current().is_none());
        } else {
            assert!(c.index() < c.len());
            assert!(c.current().is_some());
        }
    }

    #[test]
    fn navigation_wraps() {
        let mut c = Carousel::new(vec![10, 20, 30]);
        c.prev();
        assert_eq!(c.index(), 2);
        c.next();
        assert_eq!(c.index(), 0);
        c.jump_to(99);
        assert_eq!(c.index(), 2);
    }

    #[test]
    fn index_stays_in_bounds_for_any_sequence() {
        for len in 1..6u32 {
            let mut c = Carousel::new((0..len).collect());
            for step in 0..50usize {
                match step % 5 {
                    0 | 3 => c.next(),
                    1 => c.prev(),
                    2 => c.jump_to(step * 7),
                    _ => {
                        c.tick();
                    }
                }
                check_bounds(&c);
            }
        }
    }

    #[test]
    fn replacing_items_clamps_immediately() {
        for old_len in 1..6u32 {
            for new_len in 0..6u32 {
                for at in 0..old_len as usize {
                    let mut c = Carousel::new((0..old_len).collect());
                    c.jump_to(at);
                    c.replace_items((0..new_len).collect());
                    check_bounds(&c);
                    let expected = at.min((new_len as usize).saturating_sub(1));
                    assert_eq!(c.index(), expected);
                }
            }
        }
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut c: Carousel<u32> = Carousel::new(Vec::new());
        c.next();
        c.prev();
        c.jump_to(3);
        assert!(!c.tick());
        check_bounds(&c);
    }

    #[test]
    fn manual_navigation_stops_auto_advance_for_good() {
        let mut c = Carousel::new(vec![1, 2, 3]);
        assert!(c.tick());
        assert_eq!(c.index(), 1);
        c.prev();
        assert!(!c.auto_advance());
        assert!(!c.tick());
        c.replace_items(vec![4, 5]);
        assert!(!c.auto_advance());
    }

    #[test]
    fn slide_reflects_current_testimonial() {
        let mut c = Carousel::new(crate::models::fallback_testimonials());
        c.jump_to(1);
        let slide = c.slide().unwrap();
        assert_eq!(slide.index, 1);
        assert_eq!(slide.total, 4);
        assert_eq!(slide.name, "Michael Chen");
    }

    #[tokio::test(start_paused = true)]
    async fn timer_advances_on_interval() {
        let carousel = Arc::new(Mutex::new(Carousel::new(vec!['a', 'b', 'c'])));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let _timer = AutoAdvance::spawn(carousel.clone(), Duration::from_secs(5), move |c| {
            tx.send(c.index()).is_ok()
        });

        time::sleep(Duration::from_secs(4)).await;
        assert!(rx.try_recv().is_err());

        time::sleep(Duration::from_secs(12)).await;
        let mut seen = Vec::new();
        while let Ok(index) = rx.try_recv() {
            seen.push(index);
        }
        assert_eq!(seen, [1, 2, 0]);
    }

    // The task holds the only other handle on the carousel until it exits.
    fn task_exited<T>(carousel: &SharedCarousel<T>) -> bool {
        Arc::strong_count(carousel) == 1
    }

    #[tokio::test(start_paused = true)]
    async fn manual_navigation_ends_the_timer() {
        let carousel = Arc::new(Mutex::new(Carousel::new(vec![1, 2, 3])));
        let _timer = AutoAdvance::spawn(carousel.clone(), Duration::from_secs(5), |_| true);

        carousel.lock().unwrap().next();
        time::sleep(Duration::from_secs(6)).await;
        tokio::task::yield_now().await;

        assert!(task_exited(&carousel));
        assert_eq!(carousel.lock().unwrap().index(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn empty_carousel_ends_the_timer() {
        let carousel: SharedCarousel<u32> = Arc::new(Mutex::new(Carousel::new(Vec::new())));
        let _timer = AutoAdvance::spawn(carousel.clone(), Duration::from_secs(5), |_| true);

        time::sleep(Duration::from_secs(6)).await;
        tokio::task::yield_now().await;

        assert!(task_exited(&carousel));
    }

    #[tokio::test(start_paused = true)]
    async fn dropping_the_handle_stops_ticks() {
        let carousel = Arc::new(Mutex::new(Carousel::new(vec![1, 2, 3])));
        let (tx, mut rx) = mpsc::unbounded_channel();
        let timer = AutoAdvance::spawn(carousel.clone(), Duration::from_secs(5), move |c| {
            tx.send(c.index()).is_ok()
        });
        drop(timer);

        time::sleep(Duration::from_secs(30)).await;
        assert_eq!(rx.recv().await, None);
        assert_eq!(carousel.lock().unwrap().index(), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn closed_sink_ends_the_timer() {
        let carousel = Arc::new(Mutex::new(Carousel::new(vec![1, 2])));
        let (tx, rx) = mpsc::unbounded_channel::<usize>();
        drop(rx);
        let _timer = AutoAdvance::spawn(carousel.clone(), Duration::from_secs(5), move |c| {
            tx.send(c.index()).is_ok()
        });

        time::sleep(Duration::from_secs(6)).await;
        tokio::task::yield_now().await;
        assert!(task_exited(&carousel));
    }
}
