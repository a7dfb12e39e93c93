use super::catalog_store::CatalogStore;
use super::mem_backend::MemBackend;

pub type InMemoryCatalog = CatalogStore<MemBackend>;

impl Default for InMemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryCatalog {
    pub fn new() -> Self {
        CatalogStore::open(MemBackend::new())
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::NewMovie;
    use crate::store::DataStore;

    pub struct StoreFixture {
        pub store: InMemoryCatalog,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                store: InMemoryCatalog::new(),
            }
        }

        /// Three Nolan films and one Michael Mann film, ids 1 to 4.
        pub fn with_catalog(mut self) -> Self {
            for movie in [
                NewMovie::new("Inception", "Christopher Nolan", 2010, "Sci-Fi")
                    .with_duration(148)
                    .with_rating(8.8),
                NewMovie::new("Dunkirk", "Christopher Nolan", 2017, "War"),
                NewMovie::new("The Dark Knight", "Christopher Nolan", 2008, "Action").watched(),
                NewMovie::new("Heat", "Michael Mann", 1995, "Crime"),
            ] {
                self.store.add(movie);
            }
            self
        }

        pub fn with_movie(mut self, title: &str, year: i32) -> Self {
            self.store
                .add(NewMovie::new(title, "Test Director", year, "Drama"));
            self
        }
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::StoreFixture;
    use crate::store::DataStore;

    #[test]
    fn fixture_catalog_has_sequential_ids() {
        let fixture = StoreFixture::new().with_catalog();
        let ids: Vec<u64> = fixture.store.list().iter().map(|m| m.id).collect();
        assert_eq!(ids, vec![1, 2, 3, 4]);
        assert_eq!(fixture.store.next_id(), 5);
    }

    #[test]
    fn fixture_with_movie_appends() {
        let fixture = StoreFixture::new().with_movie("Alien", 1979).with_movie("Aliens", 1986);
        assert_eq!(fixture.store.len(), 2);
        assert_eq!(fixture.store.get(2).unwrap().title, "Aliens");
    }
}
