/// Registry slug for the categories model
pub const CATEGORIES_SLUG: &str = "categories";
/// Registry slug for the sub-categories model
pub const SUB_CATEGORIES_SLUG: &str = "sub-categories";

/// Display configuration for one managed model.
#[derive(Debug, Clone)]
pub struct ModelAdmin {
    /// URL slug the model is addressed by (e.g. "sub-categories")
    pub slug: &'static str,
    pub verbose_name: &'static str,
    pub verbose_name_plural: &'static str,
    /// Serialized field names shown as change-list columns, in order
    pub list_display: &'static [&'static str],
}

/// Registry mapping model slugs to their admin configuration.
///
/// Built once at startup and injected into the admin routes; models not
/// registered here are not reachable through the admin API.
#[derive(Debug, Default)]
pub struct AdminRegistry {
    entries: Vec<ModelAdmin>,
}

impl AdminRegistry {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    pub fn register(mut self, model: ModelAdmin) -> Self {
        self.entries.push(model);
        self
    }

    pub fn get(&self, slug: &str) -> Option<&ModelAdmin> {
        self.entries.iter().find(|m| m.slug == slug)
    }

    pub fn entries(&self) -> &[ModelAdmin] {
        &self.entries
    }
}

/// Registry with both catalog models, as wired at startup.
pub fn default_registry() -> AdminRegistry {
    AdminRegistry::new()
        .register(ModelAdmin {
            slug: CATEGORIES_SLUG,
            verbose_name: "category",
            verbose_name_plural: "categories",
            list_display: &["id", "name", "slug", "status"],
        })
        .register(ModelAdmin {
            slug: SUB_CATEGORIES_SLUG,
            verbose_name: "sub-category",
            verbose_name_plural: "sub-categories",
            list_display: &["id", "sub_name", "category", "unit", "status"],
        })
}
