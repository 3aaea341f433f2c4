/// URL base del backend
/// Configurada en tiempo de compilación:
/// - Desarrollo: http://localhost:3131 (por defecto)
/// - Producción: via BACKEND_URL env var (o .env, ver build.rs)
pub const BACKEND_URL: &str = match option_env!("BACKEND_URL") {
    Some(url) => url,
    None => "http://localhost:3131",
};

/// Nombres de eventos DOM propios de los widgets
pub mod events {
    /// Emitido (con bubbling) por cualquier widget cuyo valor cambia
    pub const UPDATED: &str = "updated";
    /// Emitido por una línea del carrito; `detail` = uid de la línea
    pub const REMOVE: &str = "remove";
}

/// Selectores CSS usados para localizar elementos dentro de cada contenedor
pub mod select {
    pub mod booking {
        pub const PEOPLE_AMOUNT: &str = ".people-amount";
        pub const HOURS_AMOUNT: &str = ".hours-amount";
        pub const TABLES: &str = ".floor-plan .table";
        pub const FORM: &str = ".booking-form";
        pub const PHONE: &str = "input[name=\"phone\"]";
        pub const ADDRESS: &str = "input[name=\"address\"]";
        pub const COLORED_RANGE_SLIDER: &str = ".colored-range-slider";
        pub const MESSAGE: &str = ".booking-message";
    }

    pub mod widgets {
        pub const AMOUNT_INPUT: &str = "input.amount";
        pub const LINK_DECREASE: &str = "a[href=\"#less\"]";
        pub const LINK_INCREASE: &str = "a[href=\"#more\"]";
        pub const DATE_PICKER: &str = ".date-picker";
        pub const HOUR_PICKER: &str = ".hour-picker";
        pub const INPUT: &str = "input";
        pub const OUTPUT: &str = "output";
    }

    pub mod cart {
        pub const TOGGLE_TRIGGER: &str = ".cart__summary";
        pub const PRODUCT_LIST: &str = ".cart__order-summary";
        pub const FORM: &str = ".cart__order";
        pub const PHONE: &str = "input[name=\"phone\"]";
        pub const ADDRESS: &str = "input[name=\"address\"]";
        pub const TOTAL_NUMBER: &str = ".cart__total-number";
        pub const TOTAL_PRICE: &str = ".cart__total-price strong, .cart__order-total .cart__order-price-sum strong";
        pub const SUBTOTAL_PRICE: &str = ".cart__order-subtotal .cart__order-price-sum strong";
        pub const DELIVERY_FEE: &str = ".cart__order-delivery .cart__order-price-sum strong";
        pub const MESSAGE: &str = ".cart__message";
    }

    pub mod cart_product {
        pub const AMOUNT_WIDGET: &str = ".widget-amount";
        pub const PRICE: &str = ".cart__product-price";
        pub const EDIT: &str = "[href=\"#edit\"]";
        pub const REMOVE: &str = "[href=\"#remove\"]";
    }
}

/// Clases CSS que los widgets añaden/quitan
pub mod class_names {
    pub mod booking {
        pub const LOADING: &str = "loading";
        pub const TABLE_BOOKED: &str = "booked";
        pub const TABLE_SELECTED: &str = "selected";
    }

    pub mod range_slider {
        pub const SEGMENT: &str = "range-slider__segment";
        pub const AVAILABILITY_GREEN: &str = "availability-green";
        pub const AVAILABILITY_ORANGE: &str = "availability-orange";
        pub const AVAILABILITY_RED: &str = "availability-red";
    }

    pub mod cart {
        pub const WRAPPER_ACTIVE: &str = "active";
    }

    pub mod message {
        pub const ERROR: &str = "form-message--error";
    }
}
