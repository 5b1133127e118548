//! Static name and product catalogs the generators draw from.

use medsupply_types::{Branch, CustomerType, Department, ExpenseCategory, ProductCategory};

/// Given names used for contacts and employees.
pub const FIRST_NAMES: &[&str] = &[
    "محمد", "أحمد", "عبدالله", "خالد", "فهد", "سعد", "عمر", "نورة", "سارة", "ريم", "هند",
    "فاطمة", "ماجد", "تركي", "لمى",
];

/// Family names used for contacts and employees.
pub const FAMILY_NAMES: &[&str] = &[
    "العتيبي", "القحطاني", "الغامدي", "الزهراني", "الشهري", "الدوسري", "الحربي", "المطيري",
    "السبيعي", "العنزي", "الشمري",
];

/// Facility names combined with a [`facility_prefix`].
pub const FACILITY_NAMES: &[&str] = &[
    "الحياة", "النور", "الشفاء", "السلام", "الرعاية", "الأمل", "المواساة", "البرج", "الفيصلية",
    "الهدى", "الريان", "الصفوة", "الأندلس",
];

/// Sales staff that can be assigned as account managers.
pub const ACCOUNT_MANAGERS: &[&str] = &[
    "خالد الحربي",
    "سارة القحطاني",
    "فهد الدوسري",
    "ريم الغامدي",
    "عمر الشهري",
    "نورة المطيري",
];

/// Arabic prefix for a facility of the given type.
pub const fn facility_prefix(customer_type: CustomerType) -> &'static str {
    match customer_type {
        CustomerType::Hospital => "مستشفى",
        CustomerType::Clinic => "مجمع عيادات",
        CustomerType::Pharmacy => "صيدلية",
        CustomerType::Laboratory => "مختبرات",
    }
}

/// Email domain slug for a facility type.
pub const fn facility_slug(customer_type: CustomerType) -> &'static str {
    match customer_type {
        CustomerType::Hospital => "hospital",
        CustomerType::Clinic => "clinic",
        CustomerType::Pharmacy => "pharmacy",
        CustomerType::Laboratory => "lab",
    }
}

/// Managers per branch; employees get one by hashing their name.
pub const fn branch_managers(branch: Branch) -> &'static [&'static str] {
    match branch {
        Branch::Riyadh => &["عبدالله العتيبي", "هند السبيعي"],
        Branch::Jeddah => &["ماجد الزهراني", "فاطمة الحربي"],
        Branch::Dammam => &["تركي الدوسري", "لمى الشمري"],
        Branch::Mecca => &["سعد الغامدي", "ريم العنزي"],
    }
}

/// Supplier companies and their country of origin.
pub const SUPPLIERS: &[(&str, &str)] = &[
    ("Medline Industries", "USA"),
    ("B. Braun", "Germany"),
    ("Cardinal Health", "USA"),
    ("Fresenius Kabi", "Germany"),
    ("Terumo", "Japan"),
    ("Mindray", "China"),
    ("Smith & Nephew", "UK"),
    ("Becton Dickinson", "USA"),
    ("Nipro", "Japan"),
    ("سبيماكو الدوائية", "Saudi Arabia"),
    ("جمجوم فارما", "Saudi Arabia"),
    ("Ansell", "Australia"),
];

/// A catalog product: category, name, base unit cost in halalas.
#[derive(Debug, Clone, Copy)]
pub struct Product {
    /// Product category.
    pub category: ProductCategory,
    /// Display name.
    pub name: &'static str,
    /// Base landed cost in halalas (1/100 SAR).
    pub base_cost: i64,
}

const fn product(category: ProductCategory, name: &'static str, base_cost: i64) -> Product {
    Product {
        category,
        name,
        base_cost,
    }
}

/// Every stocked product.
pub const PRODUCTS: &[Product] = &[
    product(ProductCategory::Consumables, "قفازات نيتريل (علبة 100)", 2_500),
    product(ProductCategory::Consumables, "حقن 5 مل (علبة 100)", 3_800),
    product(ProductCategory::Consumables, "شاش طبي معقم", 1_200),
    product(ProductCategory::Consumables, "قسطرة وريدية", 900),
    product(ProductCategory::Equipment, "جهاز قياس ضغط", 45_000),
    product(ProductCategory::Equipment, "مضخة محاليل", 780_000),
    product(ProductCategory::Equipment, "جهاز تخطيط قلب", 1_250_000),
    product(ProductCategory::Equipment, "سرير طبي كهربائي", 960_000),
    product(ProductCategory::Pharmaceuticals, "باراسيتامول 500 ملغ", 650),
    product(ProductCategory::Pharmaceuticals, "أموكسيسيلين 250 ملغ", 1_400),
    product(ProductCategory::Pharmaceuticals, "محلول ملحي 0.9%", 450),
    product(ProductCategory::Pharmaceuticals, "إنسولين", 6_800),
    product(ProductCategory::Laboratory, "أنابيب جمع دم", 3_200),
    product(ProductCategory::Laboratory, "كاشف جلوكوز", 18_500),
    product(ProductCategory::Laboratory, "شرائح مجهر", 2_100),
    product(ProductCategory::Surgical, "مشرط جراحي", 1_500),
    product(ProductCategory::Surgical, "خيوط جراحية", 4_200),
    product(ProductCategory::Surgical, "ملقط جراحي", 7_500),
    product(ProductCategory::Protective, "كمامات N95 (علبة 20)", 5_500),
    product(ProductCategory::Protective, "أردية عزل", 1_800),
    product(ProductCategory::Protective, "واقي وجه", 1_100),
];

/// Job titles per department.
pub const fn positions(department: Department) -> &'static [&'static str] {
    match department {
        Department::Sales => &["مندوب مبيعات", "مشرف مبيعات", "مدير حسابات"],
        Department::Warehouse => &["أمين مستودع", "عامل مستودع", "مشرف مخزون"],
        Department::Finance => &["محاسب", "محصل", "مدير مالي"],
        Department::Logistics => &["سائق توصيل", "منسق شحن"],
        Department::Administration => &["مدير فرع", "أخصائي موارد بشرية", "سكرتير"],
        Department::CustomerService => &["ممثل خدمة عملاء", "مشرف خدمة عملاء"],
    }
}

/// Base monthly salary in SAR for a department.
pub const fn base_salary(department: Department) -> i64 {
    match department {
        Department::Sales => 9_000,
        Department::Warehouse => 5_500,
        Department::Finance => 11_000,
        Department::Logistics => 6_000,
        Department::Administration => 14_000,
        Department::CustomerService => 7_000,
    }
}

/// Description and `[min, max]` amount range in SAR for an expense category.
pub const fn expense_profile(category: ExpenseCategory) -> (&'static str, u64, u64) {
    match category {
        ExpenseCategory::Salaries => ("رواتب الموظفين", 40_000, 120_000),
        ExpenseCategory::Rent => ("إيجار مستودع", 15_000, 60_000),
        ExpenseCategory::Utilities => ("كهرباء ومياه واتصالات", 2_000, 12_000),
        ExpenseCategory::Logistics => ("وقود وصيانة أسطول", 5_000, 30_000),
        ExpenseCategory::Marketing => ("حملات ومعارض طبية", 3_000, 25_000),
        ExpenseCategory::Maintenance => ("صيانة أجهزة", 1_500, 15_000),
        ExpenseCategory::Other => ("مصروفات متنوعة", 500, 8_000),
    }
}
