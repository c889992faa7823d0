#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    About,
    Services,
    Contact,
    NotFound,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution {
    Page(Route),
    Redirect(Route),
}

impl Route {
    pub fn path(self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Services => "/services",
            Route::Contact => "/contact",
            Route::NotFound => "/404",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Services => "Services",
            Route::Contact => "Contact",
            Route::NotFound => "Page not found",
        }
    }

    /// Accepts `/about`, `#/about`, `/about/` and so on. Anything unknown goes home.
    pub fn resolve(raw: &str) -> Resolution {
        let path = raw.trim();
        let path = path.strip_prefix('#').unwrap_or(path);
        let path = path.split(['?', '#']).next().unwrap_or("");
        let path = path.trim_end_matches('/');

        match path {
            "" => Resolution::Page(Route::Home),
            "/about" => Resolution::Page(Route::About),
            "/services" => Resolution::Page(Route::Services),
            "/contact" => Resolution::Page(Route::Contact),
            "/404" => Resolution::Page(Route::NotFound),
            _ => Resolution::Redirect(Route::Home),
        }
    }

    /// Route named by a form's hidden `page` field; falls back to home.
    pub fn from_form(value: &str) -> Route {
        match Route::resolve(value) {
            Resolution::Page(route) => route,
            Resolution::Redirect(route) => route,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_paths_are_pages() {
        for route in [
            Route::Home,
            Route::About,
            Route::Services,
            Route::Contact,
            Route::NotFound,
        ] {
            assert_eq!(Route::resolve(route.path()), Resolution::Page(route));
        }
    }

    #[test]
    fn hash_and_trailing_slash_are_ignored() {
        assert_eq!(Route::resolve("#/contact"), Resolution::Page(Route::Contact));
        assert_eq!(Route::resolve("/services/"), Resolution::Page(Route::Services));
        assert_eq!(Route::resolve("#/"), Resolution::Page(Route::Home));
        assert_eq!(Route::resolve("/about?x=1"), Resolution::Page(Route::About));
    }

    #[test]
    fn legacy_and_unknown_paths_redirect_home() {
        for path in ["/index", "/index.html", "/.", "/pricing", "/about/team"] {
            assert_eq!(Route::resolve(path), Resolution::Redirect(Route::Home), "{path}");
        }
    }

    #[test]
    fn form_page_field() {
        assert_eq!(Route::from_form("/contact"), Route::Contact);
        assert_eq!(Route::from_form("garbage"), Route::Home);
    }
}
