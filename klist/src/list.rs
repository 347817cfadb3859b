use std::fmt;
use std::sync::Arc;

use tuidom::{Dp, Element};

/// Renders one item into an element tree.
pub type ItemRenderer<T> = Arc<dyn Fn(&T) -> Element + Send + Sync>;

/// Invoked with the value of a clicked item.
pub type ItemClickHandler<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// Immutable list configuration.
///
/// `T` is the type of the configured items. A fresh builder has no items and
/// is typed over `()`; [`KList::with_items`] re-types it, so renderer, handler
/// and items can never disagree about what they hold.
pub struct KList<T = ()> {
    pub(crate) id: Option<String>,
    pub(crate) padding: Dp,
    pub(crate) header: Option<String>,
    pub(crate) items: Arc<[T]>,
    pub(crate) renderer: Option<ItemRenderer<T>>,
    pub(crate) on_click: Option<ItemClickHandler<T>>,
    pub(crate) dividers: bool,
}

/// Start a chain with the given padding.
pub fn padding(padding: impl Into<Dp>) -> KList {
    KList::new().with_padding(padding)
}

/// Start a chain with the given header.
pub fn header(title: impl Into<String>) -> KList {
    KList::new().with_header(title)
}

impl KList {
    /// Zero padding, no header, no items, no handler, dividers off.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<T> Default for KList<T> {
    fn default() -> Self {
        Self {
            id: None,
            padding: Dp::ZERO,
            header: None,
            items: Arc::from(Vec::new()),
            renderer: None,
            on_click: None,
            dividers: false,
        }
    }
}

impl<T> Clone for KList<T> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            padding: self.padding,
            header: self.header.clone(),
            items: Arc::clone(&self.items),
            renderer: self.renderer.clone(),
            on_click: self.on_click.clone(),
            dividers: self.dividers,
        }
    }
}

impl<T> fmt::Debug for KList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KList")
            .field("id", &self.id)
            .field("padding", &self.padding)
            .field("header", &self.header)
            .field("items", &self.items.len())
            .field("renderer", &self.renderer.is_some())
            .field("on_click", &self.on_click.is_some())
            .field("dividers", &self.dividers)
            .finish()
    }
}

impl<T> KList<T> {
    /// Padding around the whole list. Stored as given; negative values lay out as zero.
    pub fn with_padding(&self, padding: impl Into<Dp>) -> Self {
        Self {
            padding: padding.into(),
            ..self.clone()
        }
    }

    pub fn with_header(&self, title: impl Into<String>) -> Self {
        Self {
            header: Some(title.into()),
            ..self.clone()
        }
    }

    /// Draw a rule between consecutive items. There is no way to turn it back off.
    pub fn with_dividers(&self) -> Self {
        Self {
            dividers: true,
            ..self.clone()
        }
    }

    /// Prefix for the ids of every element the list emits.
    ///
    /// Virtualized lists rebuilt every frame need a stable id so the viewport
    /// reported by layout can be matched back to [`KList::lazy_column_id`].
    pub fn with_id(&self, id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            ..self.clone()
        }
    }

    /// Replace the items and their renderer, re-typing the builder.
    ///
    /// Any click handler configured before this call is dropped, since it is
    /// typed over the old item type. Call [`KList::with_click_handler`] after
    /// `with_items`:
    ///
    /// ```
    /// use klist::KList;
    /// use tuidom::Element;
    ///
    /// let list = KList::new()
    ///     .with_items(vec!["a".to_string()], |s: &String| Element::text(s))
    ///     .with_click_handler(|s: &String| println!("{s}"));
    /// assert!(list.has_click_handler());
    /// ```
    pub fn with_items<U, I, F>(&self, items: I, renderer: F) -> KList<U>
    where
        I: IntoIterator<Item = U>,
        F: Fn(&U) -> Element + Send + Sync + 'static,
    {
        if self.on_click.is_some() {
            log::debug!("with_items drops the click handler configured for the previous item type");
        }
        KList {
            id: self.id.clone(),
            padding: self.padding,
            header: self.header.clone(),
            items: items.into_iter().collect(),
            renderer: Some(Arc::new(renderer)),
            on_click: None,
            dividers: self.dividers,
        }
    }

    /// Run `handler` with the clicked item. Must come after [`KList::with_items`],
    /// which discards any handler set earlier.
    pub fn with_click_handler<F>(&self, handler: F) -> Self
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        Self {
            on_click: Some(Arc::new(handler)),
            ..self.clone()
        }
    }

    pub fn padding(&self) -> Dp {
        self.padding
    }

    pub fn header(&self) -> Option<&str> {
        self.header.as_deref()
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn has_renderer(&self) -> bool {
        self.renderer.is_some()
    }

    pub fn has_click_handler(&self) -> bool {
        self.on_click.is_some()
    }

    pub fn shows_dividers(&self) -> bool {
        self.dividers
    }

    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// Id of the lazy column emitted by [`KList::render_virtualized`], when an id is configured.
    pub fn lazy_column_id(&self) -> Option<String> {
        self.id.as_ref().map(|id| format!("{id}-items"))
    }
}
