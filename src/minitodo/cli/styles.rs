use console::Style;
use minitodo::view::Paint;
use once_cell::sync::Lazy;

pub struct Palette {
    plain: Style,
    header: Style,
    done: Style,
    overdue: Style,
    due_soon: Style,
    category: Style,
}

pub static PALETTE: Lazy<Palette> = Lazy::new(|| Palette {
    plain: Style::new(),
    header: Style::new().bold(),
    done: Style::new().green(),
    overdue: Style::new().red(),
    due_soon: Style::new().yellow(),
    category: Style::new().blue(),
});

impl Palette {
    /// The style for a span. The selected row keeps its colours and is drawn
    /// in reverse video.
    pub fn style(&self, paint: Paint, highlighted: bool) -> Style {
        let style = match paint {
            Paint::Plain => &self.plain,
            Paint::Header => &self.header,
            Paint::Done => &self.done,
            Paint::Overdue => &self.overdue,
            Paint::DueSoon => &self.due_soon,
            Paint::Category => &self.category,
        };
        if highlighted {
            style.clone().reverse()
        } else {
            style.clone()
        }
    }
}
