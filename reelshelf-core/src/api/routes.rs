/// Default remote catalog host.
pub const DEFAULT_BASE_URL: &str = "https://api.imdbapi.dev";

/// Route definitions of the remote metadata service
pub mod titles {
    pub const COLLECTION: &str = "/titles";
    pub const BATCH_GET: &str = "/titles:batchGet";
    pub const ITEM: &str = "/titles/{id}";

    pub mod item {
        pub const CREDITS: &str = "/titles/{id}/credits";
        pub const RELEASE_DATES: &str = "/titles/{id}/releaseDates";
        pub const AKAS: &str = "/titles/{id}/akas";
        pub const SEASONS: &str = "/titles/{id}/seasons";
        pub const EPISODES: &str = "/titles/{id}/episodes";
        pub const IMAGES: &str = "/titles/{id}/images";
        pub const VIDEOS: &str = "/titles/{id}/videos";
        pub const AWARD_NOMINATIONS: &str = "/titles/{id}/awardNominations";
        pub const PARENTS_GUIDE: &str = "/titles/{id}/parentsGuide";
        pub const CERTIFICATES: &str = "/titles/{id}/certificates";
        pub const COMPANY_CREDITS: &str = "/titles/{id}/companyCredits";
        pub const BOX_OFFICE: &str = "/titles/{id}/boxOffice";
    }
}

pub mod search {
    pub const TITLES: &str = "/search/titles";
}

pub mod utils {
    use url::form_urlencoded;

    /// Replace a single path parameter (e.g. `{id}`) with the percent-encoded
    /// value.
    pub fn replace_param(
        route: &str,
        param: &str,
        value: impl AsRef<str>,
    ) -> String {
        // form encoding writes spaces as `+`, which is literal in a path
        let encoded: String =
            form_urlencoded::byte_serialize(value.as_ref().as_bytes())
                .collect::<String>()
                .replace('+', "%20");
        route.replace(param, &encoded)
    }

    /// Append percent-encoded query parameters to the provided route.
    ///
    /// Pairs are emitted in the given order; repeated keys are kept, which is
    /// how array options travel on the wire.
    pub fn with_query(route: &str, params: &[(&str, String)]) -> String {
        if params.is_empty() {
            return route.to_string();
        }

        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in params {
            serializer.append_pair(key, value);
        }

        format!("{route}?{}", serializer.finish())
    }
}

#[cfg(test)]
mod tests {
    use super::utils::{replace_param, with_query};
    use super::*;

    #[test]
    fn replaces_id_placeholder() {
        assert_eq!(
            replace_param(titles::item::CREDITS, "{id}", "tt0111161"),
            "/titles/tt0111161/credits"
        );
        assert_eq!(replace_param(titles::ITEM, "{id}", "tt1"), "/titles/tt1");
    }

    #[test]
    fn path_values_are_encoded() {
        assert_eq!(
            replace_param(titles::ITEM, "{id}", "a/b c"),
            "/titles/a%2Fb%20c"
        );
    }

    #[test]
    fn query_keeps_repeated_keys_in_order() {
        let path = with_query(
            titles::COLLECTION,
            &[
                ("types", "MOVIE".to_string()),
                ("types", "TV_SERIES".to_string()),
                ("genres", "Sci-Fi".to_string()),
            ],
        );
        assert_eq!(path, "/titles?types=MOVIE&types=TV_SERIES&genres=Sci-Fi");
    }

    #[test]
    fn query_values_are_percent_encoded() {
        let path =
            with_query(search::TITLES, &[("query", "the matrix & co".into())]);
        assert_eq!(path, "/search/titles?query=the+matrix+%26+co");
    }

    #[test]
    fn empty_query_leaves_route_untouched() {
        assert_eq!(with_query(titles::COLLECTION, &[]), "/titles");
    }
}
