//! Canonical PBC category dictionary data.
//!
//! Each entry is `(name, keywords, variations)`. Order matters: it is the
//! tie-break between categories with equal combined scores, so new
//! categories go into their statement section rather than at the end.

pub(crate) type CategoryData = (&'static str, &'static [&'static str], &'static [&'static str]);

pub(crate) const BUILTIN_CATEGORIES: &[CategoryData] = &[
    // assets - non-current
    (
        "Fixed Assets - Land",
        &["land", "freehold", "leasehold", "plot", "site", "premises"],
        &["F/H land", "L/H land", "land a/c", "factory land", "office land"],
    ),
    (
        "Fixed Assets - Building",
        &["building", "factory", "office", "warehouse", "godown", "shed", "premises", "structure"],
        &["bldg", "facto bldg", "off bldg", "building a/c"],
    ),
    (
        "Fixed Assets - Plant & Machinery",
        &[
            "plant",
            "machinery",
            "equipment",
            "machine",
            "apparatus",
            "CNC",
            "lathe",
            "boiler",
            "generator",
        ],
        &["P&M", "plant & mach", "mach", "equip", "production line"],
    ),
    (
        "Fixed Assets - Furniture & Fixtures",
        &[
            "furniture",
            "fixture",
            "fitting",
            "furnishing",
            "desk",
            "chair",
            "cabinet",
            "workstation",
        ],
        &["F&F", "furn", "furn & fix", "office furniture"],
    ),
    (
        "Fixed Assets - Vehicles",
        &["vehicle", "car", "truck", "van", "transport", "automobile", "motor", "delivery"],
        &["veh", "motor veh", "auto", "delivery van"],
    ),
    (
        "Fixed Assets - Computers & IT Equipment",
        &[
            "computer",
            "laptop",
            "printer",
            "server",
            "hardware",
            "IT equipment",
            "desktop",
            "scanner",
        ],
        &["comp", "IT equip", "sys", "laptop", "server"],
    ),
    (
        "Fixed Assets - Electrical Installation",
        &["electrical", "installation", "fitting", "wiring", "transformer", "UPS", "power"],
        &["elec inst", "elec equip", "power", "electrical fitting"],
    ),
    (
        "Intangible Assets - Goodwill",
        &["goodwill", "amalgamation", "merger", "acquisition", "business combination"],
        &["GW", "goodwill a/c", "goodwill on merger"],
    ),
    (
        "Intangible Assets - Software",
        &["software", "license", "application", "ERP", "system", "SAP", "tally", "digital"],
        &["soft", "SW", "lic", "ERP", "software license"],
    ),
    (
        "Intangible Assets - Patents & Trademarks",
        &["patent", "trademark", "intellectual property", "IP", "copyright", "brand", "logo"],
        &["IP", "IPR", "pat", "TM", "brand name"],
    ),
    (
        "Capital Work in Progress",
        &[
            "capital work",
            "WIP",
            "under construction",
            "progress",
            "CWIP",
            "installation",
            "development",
        ],
        &["CWIP", "WIP", "under const", "building under construction"],
    ),
    (
        "Investments - Non-Current",
        &[
            "investment",
            "shares",
            "equity",
            "subsidiary",
            "associate",
            "long term",
            "mutual fund",
            "bond",
        ],
        &["inv", "equity inv", "LT inv", "share investment"],
    ),
    (
        "Loans & Advances - Non-Current",
        &["loan", "advance", "subsidiary", "employee", "security deposit", "intercompany"],
        &["loan given", "advance to", "deposit paid", "IC loan"],
    ),
    (
        "Deferred Tax Assets",
        &[
            "deferred tax",
            "DTA",
            "tax asset",
            "timing difference",
            "MAT credit",
            "temporary difference",
        ],
        &["DTA", "def tax asset", "MAT"],
    ),

    // assets - current
    (
        "Inventories - Raw Materials",
        &["raw material", "RM", "stock", "inventory", "material"],
        &["RM", "raw mat", "mat stock", "raw material inventory"],
    ),
    (
        "Inventories - Work in Progress",
        &[
            "work in progress",
            "WIP",
            "semi finished",
            "process",
            "semi-finished",
            "goods under process",
        ],
        &["WIP", "semi fin", "process", "WIP stock"],
    ),
    (
        "Inventories - Finished Goods",
        &["finished goods", "FG", "final product", "product stock", "finished stock"],
        &["FG", "fin goods", "product", "finished inventory"],
    ),
    (
        "Inventories - Stock in Trade",
        &["trading goods", "stock in trade", "merchandise", "goods for sale", "trading stock"],
        &["trading stock", "goods", "merchandise"],
    ),
    (
        "Inventories - Stores & Spares",
        &["stores", "spares", "consumables", "maintenance", "spare parts"],
        &["S&S", "spares", "consumables", "stores and spares"],
    ),
    (
        "Trade Receivables - Domestic",
        &[
            "debtor",
            "receivable",
            "sundry debtor",
            "trade receivable",
            "customer",
            "AR",
            "account receivable",
        ],
        &["AR", "debtors", "rec", "sundry debtors", "customer outstanding"],
    ),
    (
        "Trade Receivables - Export",
        &["export debtor", "export receivable", "overseas", "foreign debtor", "foreign customer"],
        &["export AR", "foreign rec", "overseas customer"],
    ),
    (
        "Cash on Hand",
        &["cash", "petty cash", "cash in hand", "till", "cash balance"],
        &["cash", "petty", "till", "cash at office"],
    ),
    (
        "Bank - Current Account",
        &["bank", "current account", "CC", "cash credit", "OD", "overdraft"],
        &["CA", "CC", "OD", "curr a/c", "bank current"],
    ),
    (
        "Bank - Savings Account",
        &["bank", "savings", "SB account", "saving bank"],
        &["SB", "saving a/c", "savings account"],
    ),
    (
        "Bank - Fixed Deposit",
        &["fixed deposit", "FD", "term deposit", "deposit", "bank FD"],
        &["FD", "term dep", "bank deposit"],
    ),
    (
        "GST Input Tax Credit",
        &["GST input", "ITC", "input tax credit", "CGST", "SGST", "IGST", "input credit"],
        &["ITC", "GST ITC", "input", "CGST input", "SGST input"],
    ),
    (
        "TDS Receivable",
        &["TDS", "tax deducted", "advance tax", "refund", "TDS credit"],
        &["TDS rec", "adv tax", "TDS receivable"],
    ),
    (
        "Advances to Suppliers",
        &["advance", "supplier advance", "prepayment", "vendor advance", "advance for purchase"],
        &["supp adv", "prepay", "advance to supplier"],
    ),
    (
        "Prepaid Expenses",
        &[
            "prepaid",
            "advance payment",
            "deferred expense",
            "unexpired",
            "prepaid rent",
            "prepaid insurance",
        ],
        &["prepaid exp", "adv exp", "deferred cost"],
    ),

    // equity
    (
        "Equity Share Capital",
        &["equity", "share capital", "authorized", "issued", "subscribed", "paid up"],
        &["eq cap", "share cap", "equity capital"],
    ),
    (
        "Share Premium",
        &["share premium", "securities premium", "capital reserve", "premium account"],
        &["share prem", "sec prem", "premium"],
    ),
    (
        "Reserves & Surplus - General Reserve",
        &["general reserve", "free reserve", "revenue reserve"],
        &["gen res", "free res", "general reserve"],
    ),
    (
        "Reserves & Surplus - Retained Earnings",
        &[
            "retained earnings",
            "profit and loss",
            "surplus",
            "accumulated profit",
            "P&L",
            "revenue surplus",
        ],
        &["RE", "P&L bal", "surplus", "P&L account"],
    ),

    // liabilities - non-current
    (
        "Long Term Borrowings - Term Loans",
        &["term loan", "secured loan", "bank loan", "financial institution"],
        &["TL", "secured loan", "bank term loan"],
    ),
    (
        "Long Term Borrowings - Debentures",
        &["debenture", "secured debenture", "bond", "NCD", "debt security"],
        &["NCD", "secured deb", "bond", "debenture"],
    ),
    (
        "Deferred Tax Liability",
        &["deferred tax", "DTL", "tax liability", "timing difference", "temporary difference"],
        &["DTL", "def tax liab", "tax deferral"],
    ),
    (
        "Provision for Gratuity",
        &["gratuity", "employee benefit", "retirement", "terminal benefit"],
        &["gratuity prov", "terminal", "retirement gratuity"],
    ),

    // liabilities - current
    (
        "Short Term Borrowings - Cash Credit",
        &["cash credit", "CC", "working capital", "bank OD", "overdraft"],
        &["CC", "OD", "WC loan", "working capital"],
    ),
    (
        "Trade Payables - Domestic",
        &["creditor", "payable", "sundry creditor", "trade payable", "supplier", "AP", "vendor"],
        &["AP", "creditors", "payable", "vendor outstanding"],
    ),
    (
        "Trade Payables - MSME",
        &["MSME", "micro", "small", "medium enterprise", "MSMED"],
        &["MSME cred", "MSME pay", "micro enterprise"],
    ),
    (
        "Advances from Customers",
        &["customer advance", "advance received", "unearned", "advance from customer"],
        &["cust adv", "adv rec", "customer deposit"],
    ),
    (
        "GST Payable",
        &["GST", "CGST", "SGST", "IGST", "output tax", "GST payable", "GST liability"],
        &["GST pay", "output GST", "CGST payable", "SGST payable"],
    ),
    (
        "TDS Payable",
        &["TDS", "tax deducted", "withholding tax", "TDS payable"],
        &["TDS pay", "WHT", "TDS liability"],
    ),
    (
        "PF Payable",
        &["provident fund", "PF", "employee PF", "EPFO"],
        &["PF pay", "EPFO", "PF liability"],
    ),
    (
        "ESI Payable",
        &["ESI", "employee insurance", "ESIC"],
        &["ESI pay", "ESIC", "employee state insurance"],
    ),
    (
        "Salary & Wages Payable",
        &["salary", "wages", "payroll", "remuneration"],
        &["sal pay", "wages pay", "payroll liability"],
    ),
    (
        "Provision for Income Tax",
        &["income tax", "tax provision", "current tax"],
        &["tax prov", "curr tax", "income tax payable"],
    ),

    // income - revenue
    (
        "Sales - Domestic",
        &["sales", "revenue", "domestic sales", "turnover", "sale of goods"],
        &["sales", "domestic rev", "sale", "turnover"],
    ),
    (
        "Sales - Export",
        &["export sales", "export revenue", "foreign sales", "overseas", "export turnover"],
        &["export sales", "foreign rev", "overseas sales"],
    ),
    (
        "Service Income",
        &["service revenue", "service income", "fees", "consulting", "professional fees"],
        &["service rev", "fees", "consulting income"],
    ),
    (
        "Other Operating Revenue",
        &["scrap sales", "export incentive", "duty drawback", "subsidy", "MEIS", "SEIS"],
        &["scrap", "incentive", "subsidy received"],
    ),

    // income - other income
    (
        "Interest Income",
        &["interest", "FD interest", "bank interest", "loan interest", "interest income"],
        &["int income", "FD int", "interest received"],
    ),
    (
        "Dividend Income",
        &["dividend", "subsidiary dividend", "mutual fund dividend"],
        &["div income", "dividend received"],
    ),
    (
        "Rental Income",
        &["rent", "rental", "property income", "lease rent"],
        &["rent inc", "lease rent", "rental income"],
    ),
    (
        "Profit on Sale of Assets",
        &["profit", "asset sale", "gain on disposal", "sale gain"],
        &["profit on sale", "disposal gain", "asset sale profit"],
    ),
    (
        "Foreign Exchange Gain",
        &["forex gain", "exchange gain", "currency gain", "forex profit"],
        &["forex gain", "FX gain", "exchange rate gain"],
    ),
    (
        "Miscellaneous Income",
        &["miscellaneous", "sundry income", "other income", "general"],
        &["misc income", "sundry inc", "other non-operating"],
    ),

    // expenses - direct
    (
        "Raw Material Consumed",
        &["raw material", "consumption", "RM consumed", "material cost"],
        &["RM consumed", "mat consumed", "material used"],
    ),
    (
        "Purchase of Raw Materials",
        &["raw material purchase", "RM purchase", "material purchase"],
        &["RM purchase", "mat purchase", "purchase"],
    ),
    (
        "Freight Inward",
        &["freight inward", "inward freight", "transport inward", "carriage"],
        &["freight in", "transport in", "carriage inward"],
    ),
    (
        "Power and Fuel",
        &["power", "fuel", "electricity", "diesel", "coal"],
        &["power & fuel", "elec cost", "electricity"],
    ),
    (
        "Direct Labour",
        &["labour", "wages", "direct labour", "worker cost"],
        &["labour cost", "wages", "worker wages"],
    ),

    // expenses - employee benefits
    (
        "Salaries and Wages",
        &["salary", "wages", "remuneration", "pay", "basic salary"],
        &["sal & wages", "remuner", "employee salary"],
    ),
    (
        "Contribution to PF",
        &["provident fund", "PF", "EPF", "employer contribution"],
        &["PF contrib", "EPF", "PF contribution"],
    ),
    (
        "Contribution to ESI",
        &["ESI", "employee insurance", "ESIC", "insurance contribution"],
        &["ESI contrib", "ESIC", "ESI contribution"],
    ),
    (
        "Gratuity Expense",
        &["gratuity", "terminal benefit", "retirement benefit"],
        &["gratuity exp", "terminal", "gratuity provision"],
    ),
    (
        "Staff Welfare",
        &["staff welfare", "employee welfare", "welfare expense", "canteen"],
        &["welfare exp", "emp welfare", "canteen"],
    ),

    // expenses - finance costs
    (
        "Interest on Term Loans",
        &["interest", "term loan", "loan interest", "borrowing cost"],
        &["TL int", "loan int", "interest expense"],
    ),
    (
        "Interest on Working Capital",
        &["interest", "working capital", "CC interest", "OD interest"],
        &["WC int", "CC int", "overdraft interest"],
    ),
    (
        "Bank Charges",
        &["bank charges", "bank fees", "processing fees", "service charges"],
        &["bank charges", "fees", "bank commission"],
    ),

    // expenses - depreciation
    (
        "Depreciation",
        &["depreciation", "depr", "depreciation on", "amortization"],
        &["depr", "depreciation", "dep", "amort"],
    ),

    // expenses - other
    (
        "Rent Expense",
        &["rent", "rental", "lease rent", "premises"],
        &["rent exp", "rental", "office rent"],
    ),
    (
        "Rates and Taxes",
        &["rates", "taxes", "property tax", "municipal"],
        &["rates & tax", "prop tax", "municipal tax"],
    ),
    (
        "Insurance Expense",
        &["insurance", "premium", "policy"],
        &["insurance prem", "policy", "insurance expense"],
    ),
    (
        "Repairs and Maintenance",
        &["repairs", "maintenance", "R&M", "upkeep"],
        &["R&M", "repairs", "maintenance"],
    ),
    (
        "Telephone and Internet",
        &["telephone", "internet", "mobile", "communication"],
        &["phone", "internet exp", "communication"],
    ),
    (
        "Printing and Stationery",
        &["printing", "stationery", "office supplies", "paper"],
        &["print & stat", "stationery", "office supplies"],
    ),
    (
        "Legal and Professional Fees",
        &["legal", "professional", "consultant", "advisory"],
        &["legal & prof", "consultant", "professional fees"],
    ),
    (
        "Audit Fees",
        &["audit", "auditor", "statutory audit", "audit charges"],
        &["audit fees", "auditor", "CA fees"],
    ),
    (
        "Travelling and Conveyance",
        &["travelling", "conveyance", "travel", "transport"],
        &["travel & conv", "travel exp", "conveyance"],
    ),
    (
        "Advertisement",
        &["advertisement", "publicity", "marketing", "promotion"],
        &["adv & pub", "marketing", "advertising"],
    ),
    (
        "Bad Debts Written Off",
        &["bad debts", "write off", "irrecoverable", "debt loss"],
        &["bad debt", "write off", "debt loss"],
    ),
    (
        "Foreign Exchange Loss",
        &["forex loss", "exchange loss", "currency loss", "forex"],
        &["forex loss", "FX loss", "exchange rate loss"],
    ),
    (
        "Miscellaneous Expenses",
        &["miscellaneous", "sundry expenses", "general", "other"],
        &["misc exp", "sundry", "general expenses"],
    ),
];
