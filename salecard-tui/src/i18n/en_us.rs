//! English translations (en-US)

use super::keys::*;

pub const TRANSLATIONS: Translations = Translations {
    // ========================================================================
    // Common
    // ========================================================================
    common: CommonTexts {
        app_name: "Sale Card Admin",
        yes: "Yes",
        no: "No",
    },

    // ========================================================================
    // Keyboard hints
    // ========================================================================
    hints: HintTexts {
        keys: KeyNames {
            enter: "Enter",
            esc: "Esc",
            tab: "Tab",
            arrows_lr: "←→",
            arrows_ud: "↑↓",
        },
        actions: ActionTexts {
            navigate: "Navigate",
            switch_panel: "Switch panel",
            switch_option: "Category",
            submit: "Submit",
            cancel_edit: "Cancel edit",
            open: "Open",
            edit: "Edit",
            delete: "Delete",
            new: "New",
            help: "Help",
            quit: "Quit",
        },
    },

    // ========================================================================
    // Sidebar
    // ========================================================================
    nav: NavTexts {
        title: "Books",
        cards: "Cards",
    },

    // ========================================================================
    // Catalog
    // ========================================================================
    catalog: CatalogTexts {
        form_title_new: "New card",
        form_title_edit: "Edit card",
        table_title: "Cards",
        fields: CardFieldTexts {
            title: "Title",
            description: "Description",
            category: "Category",
            price: "Price",
            sale_price: "Sale price",
            image: "Image",
        },
        columns: CardFieldTexts {
            title: "Title",
            description: "Description",
            category: "Category",
            price: "Price",
            sale_price: "Sale Price",
            image: "Image",
        },
        image_placeholder: "type a file path",
        submit: "Submit",
        update: "Update",
        favorite: "Favorite",
        sold: "Sold",
        no_cards: "No cards yet",
        no_image: "-",
    },

    // ========================================================================
    // Modals
    // ========================================================================
    modal: ModalTexts {
        confirm_delete: ConfirmDeleteTexts {
            title: "Delete card",
            message: "Are you sure you want to delete",
            confirm_button: "Delete",
            cancel_button: "Cancel",
        },
        alert_title: "Error",
        save_failed: "An error occurred. Please check the log for details.",
        delete_failed: "Error in deleting card data",
        network_error: "Network error. Please try again.",
        dismiss_hint: "Press Enter to dismiss",
    },

    // ========================================================================
    // Status bar
    // ========================================================================
    status: StatusTexts {
        loading: "Loading...",
        saving: "Saving...",
        created: "Card created",
        updated: "Card updated",
        deleting: "Deleting",
        deleted: "Card deleted",
        editing: "Editing",
        edit_cancelled: "Edit cancelled",
        unlisted_category: "category is not in the list and will be kept unless changed",
        numbers_only: "Prices accept numbers only",
        card_count: "cards",
    },

    // ========================================================================
    // Help
    // ========================================================================
    help: HelpTexts {
        title: "Help",
        global_shortcuts: "Global shortcuts",
        form_shortcuts: "Card form",
        table_shortcuts: "Card table",
        close_hint: "Press Esc to close the help",
        actions: HelpActionTexts {
            switch_panel: "Switch panel",
            toggle_sidebar: "Expand/collapse sidebar",
            refresh: "Reload cards",
            help: "Help",
            quit: "Quit",
            move_field: "Previous/next field",
            switch_category: "Change category",
            submit: "Submit",
            cancel_edit: "Cancel edit",
            move_up_down: "Move up/down",
            edit: "Edit",
            delete: "Delete",
            new: "New card",
        },
    },
};
