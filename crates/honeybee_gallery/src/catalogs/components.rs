//! Copy-paste component examples

use honeybee_core::{ComponentCategory, ComponentExample};

const TAILWIND: &[&str] = &["tailwindcss"];

pub static COMPONENTS: &[ComponentExample] = &[
    ComponentExample {
        id: "buttons",
        name: "Buttons",
        description: "Primary, secondary, ghost, and destructive button variants",
        category: ComponentCategory::Actions,
        dependencies: TAILWIND,
        code: r#"<button className="inline-flex items-center justify-center rounded-lg font-medium transition-colors px-4 py-2 bg-foreground text-background hover:bg-foreground/90">
  Primary Button
</button>

<button className="inline-flex items-center justify-center rounded-lg font-medium transition-colors px-4 py-2 bg-secondary text-foreground hover:bg-secondary/80">
  Secondary Button
</button>

<button className="inline-flex items-center justify-center rounded-lg font-medium transition-colors px-4 py-2 hover:bg-secondary text-foreground">
  Ghost Button
</button>"#,
    },
    ComponentExample {
        id: "button-sizes",
        name: "Button Sizes",
        description: "Small, medium, and large button sizes",
        category: ComponentCategory::Actions,
        dependencies: TAILWIND,
        code: r#"<button className="px-3 py-1.5 text-sm rounded-lg bg-foreground text-background">
  Small
</button>

<button className="px-4 py-2 rounded-lg bg-foreground text-background">
  Medium
</button>

<button className="px-6 py-3 text-lg rounded-lg bg-foreground text-background">
  Large
</button>"#,
    },
    ComponentExample {
        id: "cards",
        name: "Cards",
        description: "Versatile card component with various content layouts",
        category: ComponentCategory::Layout,
        dependencies: TAILWIND,
        code: r#"<div className="rounded-xl border border-border bg-card p-6 shadow-sm">
  <h3 className="font-semibold text-lg mb-2">Card Title</h3>
  <p className="text-muted-foreground text-sm">
    Card description goes here
  </p>
</div>"#,
    },
    ComponentExample {
        id: "inputs",
        name: "Inputs",
        description: "Text inputs with various states and sizes",
        category: ComponentCategory::Forms,
        dependencies: TAILWIND,
        code: r#"<input
  type="text"
  placeholder="Enter text..."
  className="flex h-10 w-full rounded-lg border border-input bg-background px-3 py-2 text-sm placeholder:text-muted-foreground focus:outline-none focus:ring-2 focus:ring-ring"
/>"#,
    },
    ComponentExample {
        id: "badges",
        name: "Badges",
        description: "Status badges and labels in different styles",
        category: ComponentCategory::Feedback,
        dependencies: TAILWIND,
        code: r#"<span className="inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-medium bg-foreground text-background">
  Default
</span>

<span className="inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-medium bg-secondary text-foreground">
  Secondary
</span>

<span className="inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-medium border border-input text-foreground">
  Outline
</span>"#,
    },
    ComponentExample {
        id: "navigation-tabs",
        name: "Navigation Tabs",
        description: "Horizontal tab navigation component",
        category: ComponentCategory::Navigation,
        dependencies: TAILWIND,
        code: r#"<div className="flex items-center gap-1 p-1 rounded-lg bg-secondary">
  <button className="px-3 py-1.5 rounded-md text-sm font-medium bg-background shadow-sm">
    Active
  </button>
  <button className="px-3 py-1.5 rounded-md text-sm font-medium text-muted-foreground hover:text-foreground">
    Inactive
  </button>
</div>"#,
    },
    ComponentExample {
        id: "modal-dialog",
        name: "Modal/Dialog",
        description: "Dialog overlay with header, content, and actions",
        category: ComponentCategory::Layout,
        dependencies: TAILWIND,
        code: r#"<div className="rounded-xl border border-border bg-card shadow-lg max-w-md">
  <div className="p-6">
    <h3 className="font-semibold text-lg mb-2">Dialog Title</h3>
    <p className="text-muted-foreground text-sm mb-4">
      Dialog description text goes here.
    </p>
    <div className="flex justify-end gap-2">
      <button className="px-4 py-2 rounded-lg hover:bg-secondary">
        Cancel
      </button>
      <button className="px-4 py-2 rounded-lg bg-foreground text-background">
        Confirm
      </button>
    </div>
  </div>
</div>"#,
    },
    ComponentExample {
        id: "alert-toast",
        name: "Alert/Toast",
        description: "Notification alerts with different severity levels",
        category: ComponentCategory::Feedback,
        dependencies: TAILWIND,
        code: r#"<div className="rounded-lg border p-4 bg-green-500/10 border-green-500/20">
  <p className="text-sm font-medium text-green-600">
    Success! Your changes have been saved.
  </p>
</div>"#,
    },
];
