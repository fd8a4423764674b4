use crate::core::cascade::GeoCascade;
use crate::domain::model::Level;
use crate::domain::ports::{Dom, OptionSource};

/// Inline "add new value" sub-forms. Adding at one level opens the
/// sub-forms of that level and everything downstream; canceling closes
/// them again and abandons any downstream free-text entry.
impl<D: Dom, S: OptionSource> GeoCascade<D, S> {
    pub(crate) fn add_new(&self, level: Level) {
        if !self.toggles.contains(&level) {
            return;
        }
        for l in level.toggle_chain() {
            self.switch_forms(*l);
        }
    }

    pub(crate) fn cancel_new(&self, level: Level) {
        if !self.toggles.contains(&level) {
            return;
        }
        for l in level.toggle_chain() {
            self.switch_forms(*l);
            self.dom
                .set_value(&format!("#EmpreendimentoNew{}", l.dom_name()), "");
        }
    }

    fn switch_forms(&self, level: Level) {
        let name = level.dom_name();
        self.dom.toggle_class(&format!(".lista_geo-{}", name), "hidden");
        self.dom.toggle_class(&format!(".input_new-{}", name), "hidden");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::page::InMemoryPage;
    use crate::config::GeoConfig;
    use crate::domain::model::{OptionList, Trigger};
    use crate::utils::error::Result;
    use async_trait::async_trait;

    struct NullSource;

    #[async_trait]
    impl OptionSource for NullSource {
        async fn fetch(&self, _url: &str) -> Result<OptionList> {
            Ok(Vec::new())
        }
    }

    fn attach_full(page: &InMemoryPage) -> GeoCascade<InMemoryPage, NullSource> {
        page.add_select("#ContinenteId");
        page.add_select("#PaisId");
        page.add_select("#EstadoId");
        page.add_select("#CidadeId");

        let config = GeoConfig {
            webroot: "https://host/app/".to_string(),
            continente_id: "#ContinenteId".to_string(),
            pais_id: "#PaisId".to_string(),
            estado_id: "#EstadoId".to_string(),
            cidade_id: "#CidadeId".to_string(),
            ..GeoConfig::default()
        };
        GeoCascade::attach("#GeoForm", page.clone(), NullSource, config).unwrap()
    }

    #[tokio::test]
    async fn test_add_at_country_opens_all_downstream_forms() {
        let page = InMemoryPage::default();
        let cascade = attach_full(&page);

        cascade.handle(Trigger::AddNew(Level::Pais)).await;

        for name in ["Pais", "Estado", "Cidade"] {
            assert_eq!(page.toggle_count(&format!(".lista_geo-{}", name)), 1);
            assert_eq!(page.toggle_count(&format!(".input_new-{}", name)), 1);
        }
        // Adding never clears the free-text inputs
        assert_eq!(page.input("#EmpreendimentoNewPais"), None);
    }

    #[tokio::test]
    async fn test_add_at_city_leaves_upstream_forms_alone() {
        let page = InMemoryPage::default();
        let cascade = attach_full(&page);

        cascade.handle(Trigger::AddNew(Level::Cidade)).await;

        assert_eq!(page.toggle_count(".lista_geo-Cidade"), 1);
        assert_eq!(page.toggle_count(".lista_geo-Estado"), 0);
        assert_eq!(page.toggle_count(".lista_geo-Pais"), 0);
    }

    #[tokio::test]
    async fn test_cancel_at_country_clears_all_downstream_inputs() {
        let page = InMemoryPage::default();
        let cascade = attach_full(&page);

        cascade.handle(Trigger::CancelNew(Level::Pais)).await;

        for name in ["Pais", "Estado", "Cidade"] {
            assert_eq!(page.toggle_count(&format!(".lista_geo-{}", name)), 1);
            assert_eq!(page.toggle_count(&format!(".input_new-{}", name)), 1);
            assert_eq!(
                page.input(&format!("#EmpreendimentoNew{}", name)),
                Some(String::new())
            );
        }
    }

    #[tokio::test]
    async fn test_cancel_at_state_spares_the_country_input() {
        let page = InMemoryPage::default();
        let cascade = attach_full(&page);

        cascade.handle(Trigger::CancelNew(Level::Estado)).await;

        assert_eq!(page.input("#EmpreendimentoNewPais"), None);
        assert_eq!(page.input("#EmpreendimentoNewEstado"), Some(String::new()));
        assert_eq!(page.input("#EmpreendimentoNewCidade"), Some(String::new()));
    }

    #[tokio::test]
    async fn test_unregistered_level_is_ignored() {
        let page = InMemoryPage::default();
        page.add_select("#ContinenteId");
        page.add_select("#PaisId");

        let config = GeoConfig {
            webroot: "https://host/app/".to_string(),
            continente_id: "#ContinenteId".to_string(),
            pais_id: "#PaisId".to_string(),
            ..GeoConfig::default()
        };
        let cascade = GeoCascade::attach("#GeoForm", page.clone(), NullSource, config).unwrap();

        // Estado has no toggle binding; continente never has one
        cascade.handle(Trigger::AddNew(Level::Estado)).await;
        cascade.handle(Trigger::CancelNew(Level::Continente)).await;

        assert_eq!(page.toggle_count(".lista_geo-Estado"), 0);
        assert_eq!(page.toggle_count(".lista_geo-Pais"), 0);
    }
}
