//! Display strings of the customer screens.
//!
//! Defaults are the Arabic texts the screens ship with; pass another
//! `Labels` value to render them in a different language.

/// Number of columns in the customer table, including the actions column.
pub const CUSTOMER_COLUMN_COUNT: usize = 9;

/// Text direction of a label set
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextDirection {
    Rtl,
    Ltr,
}

impl TextDirection {
    pub fn as_str(self) -> &'static str {
        match self {
            TextDirection::Rtl => "rtl",
            TextDirection::Ltr => "ltr",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Labels {
    pub lang: &'static str,
    pub direction: TextDirection,

    // Таблица
    pub loading: &'static str,
    pub search_placeholder: &'static str,
    /// Column headers in display order
    pub columns: [&'static str; CUSTOMER_COLUMN_COUNT],
    pub no_customers: &'static str,
    /// Shown in place of an absent value
    pub missing: &'static str,
    pub currency: &'static str,
    pub edit: &'static str,
    pub delete: &'static str,

    // Страница
    pub page_title: &'static str,
    pub reload: &'static str,
    /// Caption of the button switching to the other language
    pub switch_language: &'static str,
    pub edit_title: &'static str,
    pub close: &'static str,
    pub arrival_time: &'static str,
    pub ownership: &'static str,
    pub notes: &'static str,
    pub created_at: &'static str,
    pub updated_at: &'static str,
}

impl Default for Labels {
    fn default() -> Self {
        Self {
            lang: "ar",
            direction: TextDirection::Rtl,
            loading: "جاري التحميل...",
            search_placeholder: "البحث بالاسم أو رقم الهاتف...",
            columns: [
                "اسم العميل",
                "رقم الهاتف",
                "نوع الخط",
                "تاريخ الشحن",
                "حالة الدفع",
                "السعر الشهري",
                "حالة التجديد",
                "مقدم الخدمة",
                "الإجراءات",
            ],
            no_customers: "لا توجد عملاء",
            missing: "-",
            currency: "ريال",
            edit: "تعديل",
            delete: "حذف",
            page_title: "العملاء",
            reload: "تحديث",
            switch_language: "English",
            edit_title: "تعديل العميل",
            close: "إغلاق",
            arrival_time: "وقت الوصول",
            ownership: "الملكية",
            notes: "ملاحظات",
            created_at: "تاريخ الإنشاء",
            updated_at: "آخر تحديث",
        }
    }
}

impl Labels {
    /// English variant for LTR deployments.
    pub fn english() -> Self {
        Self {
            lang: "en",
            direction: TextDirection::Ltr,
            loading: "Loading...",
            search_placeholder: "Search by name or phone number...",
            columns: [
                "Customer name",
                "Mobile number",
                "Line type",
                "Charging date",
                "Payment status",
                "Monthly price",
                "Renewal status",
                "Provider",
                "Actions",
            ],
            no_customers: "No customers",
            missing: "-",
            currency: "SAR",
            edit: "Edit",
            delete: "Delete",
            page_title: "Customers",
            reload: "Reload",
            switch_language: "العربية",
            edit_title: "Edit customer",
            close: "Close",
            arrival_time: "Arrival time",
            ownership: "Ownership",
            notes: "Notes",
            created_at: "Created",
            updated_at: "Updated",
        }
    }

    pub fn for_lang(english: bool) -> Self {
        if english {
            Self::english()
        } else {
            Self::default()
        }
    }
}
