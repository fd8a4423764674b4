use crate::config::GeoConfig;
use crate::core::render::render_options;
use crate::domain::model::{Level, Trigger};
use crate::domain::ports::{Dom, OptionSource, SelectControl};
use std::collections::HashMap;
use std::sync::Arc;

const PLUGIN_NAME: &str = "GeoChange";

/// One adjacent pair of the chain. Built at attach time and kept only when
/// both the trigger and the target control resolved.
struct CascadeRule {
    trigger: Level,
    target: Level,
    endpoint: String,
    value_key: &'static str,
    /// Another control whose current value rides along in the query
    /// (city fetches carry the selected country when one exists).
    forward: Option<(Level, &'static str)>,
    /// Further-downstream controls cleared on change, with the prompt each
    /// one shows until its own upstream gets selected.
    clears: Vec<(Level, String)>,
    /// Placeholder text once the fetch succeeds.
    select_prompt: String,
}

/// Cascading-selection controller: a change on an upstream control fetches
/// the valid options for the next one and repopulates it. The host page
/// and the HTTP transport stay behind the `Dom` and `OptionSource` ports.
pub struct GeoCascade<D: Dom, S: OptionSource> {
    pub(crate) config: GeoConfig,
    pub(crate) controls: HashMap<Level, Arc<dyn SelectControl>>,
    rules: Vec<CascadeRule>,
    pub(crate) toggles: Vec<Level>,
    pub(crate) dom: D,
    source: S,
}

impl<D: Dom, S: OptionSource> GeoCascade<D, S> {
    /// Attaches the controller to `element`. Returns `None` without
    /// touching the page when the element is already attached or when no
    /// webroot was configured.
    pub fn attach(element: &str, dom: D, source: S, config: GeoConfig) -> Option<Self> {
        if !dom.mark_attached(element, PLUGIN_NAME) {
            tracing::debug!("{} already attached to {}", PLUGIN_NAME, element);
            return None;
        }

        if config.webroot.is_empty() {
            return None;
        }

        // 解析已設定的 selector，解析失敗視同未設定
        let mut controls: HashMap<Level, Arc<dyn SelectControl>> = HashMap::new();
        for level in [Level::Continente, Level::Pais, Level::Estado, Level::Cidade] {
            let selector = config.selector(level);
            if selector.is_empty() {
                continue;
            }
            if let Some(control) = dom.select(selector) {
                controls.insert(level, control);
            }
        }

        let mut cascade = Self {
            config,
            controls,
            rules: Vec::new(),
            toggles: Vec::new(),
            dom,
            source,
        };
        cascade.register_bindings();

        tracing::info!(
            "{} attached to {}: {} cascade rule(s), {} toggle level(s)",
            PLUGIN_NAME,
            element,
            cascade.rules.len(),
            cascade.toggles.len()
        );

        Some(cascade)
    }

    /// Builds the cascade table, one candidate per adjacent pair, and
    /// registers page bindings for the entries that survived filtering.
    fn register_bindings(&mut self) {
        let candidates = vec![
            CascadeRule {
                trigger: Level::Continente,
                target: Level::Pais,
                endpoint: self.config.pais_url.clone(),
                value_key: "continente_id",
                forward: None,
                clears: vec![
                    (Level::Estado, self.config.pais_loading_message.clone()),
                    (Level::Cidade, self.config.cidade_loading_message.clone()),
                ],
                select_prompt: self.config.pais_loading_message.clone(),
            },
            CascadeRule {
                trigger: Level::Pais,
                target: Level::Estado,
                endpoint: self.config.estado_url.clone(),
                value_key: "pais_id",
                forward: None,
                clears: vec![(Level::Cidade, self.config.cidade_loading_message.clone())],
                select_prompt: self.config.estado_loading_message.clone(),
            },
            CascadeRule {
                trigger: Level::Estado,
                target: Level::Cidade,
                endpoint: self.config.cidade_url.clone(),
                value_key: "estado_id",
                forward: Some((Level::Pais, "pais_id")),
                clears: Vec::new(),
                select_prompt: self.config.cidade_loading_message.clone(),
            },
        ];

        for mut rule in candidates {
            if !self.controls.contains_key(&rule.trigger)
                || !self.controls.contains_key(&rule.target)
            {
                continue;
            }
            rule.clears.retain(|(level, _)| self.controls.contains_key(level));
            self.dom.on(
                self.config.selector(rule.trigger),
                "change",
                Trigger::Change(rule.trigger),
            );
            self.rules.push(rule);
        }

        for level in [Level::Pais, Level::Estado, Level::Cidade] {
            if !self.controls.contains_key(&level) {
                continue;
            }
            let name = level.dom_name();
            self.dom
                .on(&format!("#AddGeo{}", name), "click", Trigger::AddNew(level));
            self.dom.on(
                &format!("#CancelGeo{}", name),
                "click",
                Trigger::CancelNew(level),
            );
            self.toggles.push(level);
        }
    }

    /// Entry point for the host glue: routes a dispatched page event to the
    /// matching handler. Unregistered triggers are ignored.
    pub async fn handle(&self, trigger: Trigger) {
        match trigger {
            Trigger::Change(level) => self.on_change(level).await,
            Trigger::AddNew(level) => self.add_new(level),
            Trigger::CancelNew(level) => self.cancel_new(level),
        }
    }

    async fn on_change(&self, level: Level) {
        let Some(rule) = self.rules.iter().find(|r| r.trigger == level) else {
            return;
        };
        let Some(trigger_control) = self.controls.get(&rule.trigger) else {
            return;
        };
        let Some(target_control) = self.controls.get(&rule.target) else {
            return;
        };

        let upstream_value = trigger_control.value();
        if self.config.debug {
            tracing::debug!("{} changed to '{}'", rule.trigger.dom_name(), upstream_value);
        }

        // 先清空所有下游 select，只留 placeholder，再通知 enhanced widget
        target_control.set_content(&render_options(&self.config.loading_message, &[]));
        for (cleared_level, prompt) in &rule.clears {
            if let Some(control) = self.controls.get(cleared_level) {
                control.set_content(&render_options(prompt, &[]));
            }
        }
        self.update_enhanced_selects();

        let url = self.build_url(rule, &upstream_value);
        match self.source.fetch(&url).await {
            Ok(entries) => {
                target_control.set_content(&render_options(&rule.select_prompt, &entries));
                self.update_enhanced_selects();
            }
            Err(e) => {
                // Only the city level surfaces transport failures. The
                // other levels fail silently, same as the original plugin.
                if rule.target == Level::Cidade {
                    self.dom
                        .alert(&format!("Não foi possível carregar as cidades: {}", e));
                } else {
                    tracing::debug!(
                        "option fetch for {} failed: {}",
                        rule.target.dom_name(),
                        e
                    );
                }
            }
        }
    }

    fn build_url(&self, rule: &CascadeRule, upstream_value: &str) -> String {
        let mut query = url::form_urlencoded::Serializer::new(String::new());

        if let Some((forward_level, key)) = rule.forward {
            if let Some(control) = self.controls.get(&forward_level) {
                query.append_pair(key, &control.value());
            }
        }
        query.append_pair(rule.value_key, upstream_value);
        query.append_pair("joined", if self.config.joined { "true" } else { "false" });

        format!("{}{}?{}", self.config.webroot, rule.endpoint, query.finish())
    }

    /// Best-effort resync of enhanced-dropdown widgets after an option
    /// list was replaced programmatically. Absence of the widget class is
    /// the normal case.
    pub(crate) fn update_enhanced_selects(&self) {
        for level in [Level::Pais, Level::Estado, Level::Cidade] {
            if let Some(control) = self.controls.get(&level) {
                if control.has_class("chzn-select") {
                    control.trigger("liszt:updated");
                }
            }
        }
    }
}
