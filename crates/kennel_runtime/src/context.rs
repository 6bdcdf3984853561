//! Browsing context
//!
//! Owns one page's style registry, mounted buttons and signal bus, and runs
//! the change propagation protocol:
//!
//! 1. the editor saves the active theme or preset and emits
//!    [`StyleSignal::RefreshRequest`]
//! 2. every style channel refetches its blob and, on success, replaces its
//!    sheet, then [`StyleSignal::StyleApplied`] is emitted
//! 3. on `StyleApplied` every mounted button recomputes its inline style
//!
//! Fetch failures leave the previous sheet in place.

use crate::document::{ButtonElement, ButtonId, ButtonProps, Document};
use crate::registry::{StyleRegistry, StyleSlot};
use crate::source::{FetchError, InstancePreset, StyleSource};
use kennel_core::{ListenerId, SignalBus, StyleSignal};
use kennel_theme::{
    resolve_button_style, scope_preset_css, ButtonTokens, ResolvedButtonStyle, StyleLayers,
    ThemeShape,
};
use rustc_hash::FxHashMap;

pub struct BrowsingContext<S> {
    source: S,
    registry: StyleRegistry,
    document: Document,
    signals: SignalBus,
    /// Every instance slug referenced by a mounted button, with the tokens of
    /// its preset once resolved. Unresolved slugs are retried on refresh.
    instances: FxHashMap<String, Option<ButtonTokens>>,
}

impl<S: StyleSource> BrowsingContext<S> {
    pub fn new(source: S, route: impl Into<String>) -> Self {
        Self {
            source,
            registry: StyleRegistry::new(),
            document: Document::new(route),
            signals: SignalBus::new(),
            instances: FxHashMap::default(),
        }
    }

    pub fn source(&self) -> &S {
        &self.source
    }

    pub fn registry(&self) -> &StyleRegistry {
        &self.registry
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn button(&self, id: ButtonId) -> Option<&ButtonElement> {
        self.document.get(id)
    }

    pub fn button_style(&self, id: ButtonId) -> Option<&ResolvedButtonStyle> {
        self.document.get(id).map(|b| &b.style)
    }

    /// Listen for a style signal in this context
    pub fn subscribe<F>(&mut self, signal: StyleSignal, handler: F) -> ListenerId
    where
        F: Fn(StyleSignal) + Send + Sync + 'static,
    {
        self.signals.subscribe(signal, handler)
    }

    pub fn unsubscribe(&mut self, id: ListenerId) -> bool {
        self.signals.unsubscribe(id)
    }

    /// Fetch the theme and global preset sheets for a fresh page
    pub async fn load(&mut self) {
        self.refresh_global_channels().await;
        self.signals.emit(StyleSignal::StyleApplied);
        self.pump().await;
    }

    /// Mount a button, fetching and injecting its instance preset if needed
    pub async fn mount_button(&mut self, props: ButtonProps) -> ButtonId {
        if let Some(slug) = props.instance_slug().map(str::to_string) {
            if !self.instances.contains_key(&slug) {
                let result = self.source.button_preset(&slug).await;
                self.apply_instance(&slug, result);
            }
        }
        let id = self.document.insert(props);
        self.recompute(id);
        id
    }

    /// Unmount a button; its instance sheet goes once nothing references the slug
    pub fn unmount_button(&mut self, id: ButtonId) -> bool {
        let Some(element) = self.document.remove(id) else {
            return false;
        };
        if let Some(slug) = element.props.instance_slug() {
            self.release_instance(slug);
        }
        true
    }

    /// Replace the page: unmount every button, then mount the new ones
    pub async fn navigate(
        &mut self,
        route: impl Into<String>,
        buttons: Vec<ButtonProps>,
    ) -> Vec<ButtonId> {
        let route = route.into();
        tracing::debug!(%route, "navigating");
        let removed = self.document.replace_route(route);
        let mut slugs: Vec<String> = removed
            .iter()
            .filter_map(|b| b.props.instance_slug().map(str::to_string))
            .collect();
        slugs.sort();
        slugs.dedup();
        for slug in &slugs {
            self.release_instance(slug);
        }

        let mut ids = Vec::with_capacity(buttons.len());
        for props in buttons {
            ids.push(self.mount_button(props).await);
        }
        ids
    }

    /// Editor hook after a successful save.
    ///
    /// Only a save of the record currently in effect triggers a refresh.
    pub async fn notify_saved(&mut self, saved_record_is_active: bool) {
        if saved_record_is_active {
            self.emit_refresh();
            self.pump().await;
        }
    }

    /// Queue a refresh request (fire-and-forget)
    pub fn emit_refresh(&mut self) {
        self.signals.emit(StyleSignal::RefreshRequest);
    }

    /// Deliver queued signals in order and react to each.
    ///
    /// Returns the number of signals handled.
    pub async fn pump(&mut self) -> usize {
        let mut handled = 0;
        while let Some(signal) = self.signals.next() {
            handled += 1;
            match signal {
                StyleSignal::RefreshRequest => {
                    if self.refresh().await {
                        self.signals.emit(StyleSignal::StyleApplied);
                    }
                }
                StyleSignal::StyleApplied => self.recompute_all(),
            }
        }
        handled
    }

    /// Refetch every mounted channel; true if any sheet changed
    async fn refresh(&mut self) -> bool {
        tracing::debug!(instances = self.instances.len(), "refreshing styles");
        let mut changed = self.refresh_global_channels().await;

        let mut slugs: Vec<String> = self.instances.keys().cloned().collect();
        slugs.sort();
        for slug in slugs {
            let result = self.source.button_preset(&slug).await;
            changed |= self.apply_instance(&slug, result);
        }
        changed
    }

    async fn refresh_global_channels(&mut self) -> bool {
        let (theme, preset) = tokio::join!(
            self.source.active_theme_css(),
            self.source.active_button_preset_css()
        );
        let theme_changed = self.apply_channel(StyleSlot::Theme, theme);
        let preset_changed = self.apply_channel(StyleSlot::GlobalButtonPreset, preset);
        theme_changed || preset_changed
    }

    fn apply_channel(
        &mut self,
        slot: StyleSlot,
        result: Result<Option<String>, FetchError>,
    ) -> bool {
        match result {
            Ok(Some(css)) => {
                self.registry.inject(slot, css);
                true
            }
            Ok(None) => self.registry.remove(&slot),
            Err(err) => {
                tracing::warn!(%slot, error = %err, "style fetch failed, keeping previous sheet");
                false
            }
        }
    }

    fn apply_instance(
        &mut self,
        slug: &str,
        result: Result<Option<InstancePreset>, FetchError>,
    ) -> bool {
        let slot = StyleSlot::Instance(slug.to_string());
        match result {
            Ok(Some(found)) => {
                self.registry.inject(slot, scope_preset_css(&found.css, slug));
                self.instances
                    .insert(slug.to_string(), Some(found.preset.tokens()));
                true
            }
            Ok(None) => {
                tracing::debug!(slug, "instance preset not available, using global styles");
                self.instances.insert(slug.to_string(), None);
                self.registry.remove(&slot)
            }
            Err(err) => {
                tracing::warn!(slug, error = %err, "instance preset fetch failed");
                self.instances.entry(slug.to_string()).or_insert(None);
                false
            }
        }
    }

    fn release_instance(&mut self, slug: &str) {
        if self.document.references_slug(slug) {
            return;
        }
        self.instances.remove(slug);
        self.registry.remove(&StyleSlot::Instance(slug.to_string()));
    }

    fn recompute_all(&mut self) {
        let ids = self.document.ids();
        tracing::trace!(buttons = ids.len(), "recomputing button styles");
        self.recompute_buttons(&ids);
    }

    fn recompute(&mut self, id: ButtonId) {
        self.recompute_buttons(&[id]);
    }

    fn recompute_buttons(&mut self, ids: &[ButtonId]) {
        let vars = self.registry.root_variables();
        let theme = ThemeShape::from_variables(&vars);
        let global = ButtonTokens::from_variables(&vars);
        for &id in ids {
            let Some(element) = self.document.get_mut(id) else {
                continue;
            };
            let instance = element
                .props
                .instance_slug()
                .and_then(|slug| self.instances.get(slug))
                .and_then(Option::as_ref);
            element.style = resolve_button_style(
                element.props.context,
                element.props.variant,
                element.props.size,
                StyleLayers {
                    theme: theme.as_ref(),
                    global: global.as_ref(),
                    instance,
                },
            );
        }
    }
}
