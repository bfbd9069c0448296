use crate::models::{Tour, TourType};

use super::{description_teaser, escape_html, format_duration_hours, format_price_from};

pub fn render_catalog(tours: &[Tour]) -> String {
    let cards = if tours.is_empty() {
        r#"<p class="empty">Пока нет доступных туров.</p>"#.to_string()
    } else {
        tours.iter().map(render_tour_card).collect::<Vec<_>>().join("\n")
    };
    CATALOG_HTML
        .replace("{{CARDS}}", &cards)
        .replace("{{LOAD_ERROR}}", "")
}

pub fn render_catalog_error(message: &str) -> String {
    let banner = format!(
        r#"<div class="banner banner-error">{}</div>"#,
        escape_html(message)
    );
    CATALOG_HTML
        .replace("{{CARDS}}", "")
        .replace("{{LOAD_ERROR}}", &banner)
}

fn type_class(tour_type: &TourType) -> &'static str {
    match tour_type {
        TourType::Jeeping => "jeeping",
        TourType::Yacht => "yacht",
        TourType::Excursion => "excursion",
        TourType::Other(_) => "default",
    }
}

fn render_tour_card(tour: &Tour) -> String {
    let title = escape_html(&tour.title);
    let price = format_price_from(tour.price_from);
    let duration = format_duration_hours(tour.duration_hours);
    let teaser = escape_html(&description_teaser(tour.description.as_deref()));
    let description = escape_html(tour.description.as_deref().unwrap_or(""));
    let kind = type_class(&tour.tour_type);

    let image = match &tour.image_url {
        Some(url) => format!(
            r#"<img class="tour-photo" src="{}" alt="{}">"#,
            escape_html(url),
            title
        ),
        None => format!(r#"<div class="tour-photo tour-photo--{kind}"></div>"#),
    };

    let teaser_block = if teaser.is_empty() {
        String::new()
    } else {
        format!(r#"<div class="tour-meta">{teaser}</div>"#)
    };

    format!(
        r#"<article class="tour-card" data-id="{id}" data-title="{title}" data-badge="{badge}" data-price="{price}" data-duration="{duration}" data-description="{description}">
  <div class="tour-image">{image}</div>
  <div class="tour-content">
    <div class="tour-badge tour-badge--{kind}">{badge}</div>
    <div class="tour-title">{title}</div>
    {teaser_block}
    <div class="tour-footer">
      <div class="tour-price">{price}</div>
      <button type="button" class="btn btn-primary book-btn">Смотреть</button>
    </div>
  </div>
</article>"#,
        id = tour.id,
        badge = tour.tour_type.badge_label(),
    )
}

const CATALOG_HTML: &str = r#"<!DOCTYPE html>
<html lang="ru">
<head>
  <meta charset="UTF-8" />
  <meta name="viewport" content="width=device-width, initial-scale=1.0" />
  <title>Adler Tours</title>
  <script src="https://telegram.org/js/telegram-web-app.js"></script>
  <style>
    :root {
      --bg: #10141f;
      --card: #1a2030;
      --ink: #f2f4f8;
      --muted: #9aa3b5;
      --accent: #2f9e6e;
      --accent-2: #3f7fd4;
      --danger: #d4543f;
      --radius: 16px;
    }

    * {
      box-sizing: border-box;
    }

    body {
      margin: 0;
      min-height: 100vh;
      background: var(--bg);
      color: var(--ink);
      font-family: -apple-system, "Segoe UI", Roboto, sans-serif;
      padding: 16px 14px 40px;
    }

    header h1 {
      margin: 0 0 4px;
      font-size: 1.5rem;
    }

    header p {
      margin: 0 0 18px;
      color: var(--muted);
      font-size: 0.95rem;
    }

    .banner {
      border-radius: var(--radius);
      padding: 12px 14px;
      margin-bottom: 14px;
      font-size: 0.95rem;
    }

    .banner-error {
      background: rgba(212, 84, 63, 0.16);
      color: #f0a79a;
    }

    .banner-success {
      background: rgba(47, 158, 110, 0.16);
      color: #8fd8b6;
    }

    .hidden {
      display: none !important;
    }

    .empty {
      color: var(--muted);
    }

    .tour-card {
      background: var(--card);
      border-radius: var(--radius);
      overflow: hidden;
      margin-bottom: 16px;
    }

    .tour-image {
      height: 150px;
      overflow: hidden;
    }

    .tour-photo {
      width: 100%;
      height: 100%;
      object-fit: cover;
      display: block;
    }

    .tour-photo--jeeping {
      background: linear-gradient(135deg, #5a4632, #2c3a2b);
    }

    .tour-photo--yacht {
      background: linear-gradient(135deg, #1d3a5f, #123047);
    }

    .tour-photo--excursion {
      background: linear-gradient(135deg, #4a3b63, #2a2440);
    }

    .tour-photo--default {
      background: linear-gradient(135deg, #3a4152, #232a3a);
    }

    .tour-content {
      padding: 14px 16px 16px;
    }

    .tour-badge {
      display: inline-block;
      font-size: 0.7rem;
      letter-spacing: 0.1em;
      padding: 3px 8px;
      border-radius: 999px;
      background: #2a3145;
      color: var(--muted);
      margin-bottom: 8px;
    }

    .tour-badge--jeeping { color: #d9b45a; }
    .tour-badge--yacht { color: #7db3f0; }
    .tour-badge--excursion { color: #b492e8; }

    .tour-title {
      font-size: 1.15rem;
      font-weight: 600;
      margin-bottom: 4px;
    }

    .tour-meta {
      color: var(--muted);
      font-size: 0.9rem;
      margin-bottom: 10px;
    }

    .tour-footer {
      display: flex;
      align-items: center;
      justify-content: space-between;
      gap: 10px;
    }

    .tour-price {
      font-weight: 600;
    }

    .btn {
      appearance: none;
      border: none;
      border-radius: 10px;
      padding: 10px 16px;
      font-size: 0.95rem;
      font-weight: 600;
      cursor: pointer;
      color: white;
    }

    .btn-primary {
      background: var(--accent);
    }

    .btn-outline {
      background: transparent;
      border: 1px solid #39415a;
      color: var(--muted);
    }

    .btn:disabled {
      opacity: 0.6;
    }

    .mini-card {
      background: var(--card);
      border-radius: var(--radius);
      padding: 14px 16px;
      margin-bottom: 16px;
    }

    .mini-card .tour-meta {
      margin-bottom: 0;
    }

    .progress {
      height: 6px;
      border-radius: 999px;
      background: #262d40;
      overflow: hidden;
      margin-bottom: 16px;
    }

    .progress-bar {
      height: 100%;
      width: 0;
      background: var(--accent-2);
      transition: width 200ms ease;
    }

    .field {
      margin-bottom: 12px;
    }

    .field label {
      display: block;
      font-size: 0.85rem;
      color: var(--muted);
      margin-bottom: 4px;
    }

    .field input,
    .field textarea {
      width: 100%;
      background: #141926;
      color: var(--ink);
      border: 1px solid #2b3247;
      border-radius: 10px;
      padding: 10px 12px;
      font-size: 1rem;
    }

    form .btn-primary {
      width: 100%;
      margin-top: 6px;
    }
  </style>
</head>
<body>
  <div id="tours-container">
    <header>
      <h1>Adler Tours</h1>
      <p>Джипинг, яхты и экскурсии в Сочи и Адлере</p>
    </header>
    {{LOAD_ERROR}}
    <div id="tours-list">
      {{CARDS}}
    </div>
  </div>

  <div id="booking-container" class="hidden">
    <button type="button" class="btn btn-outline" id="back-button">← К турам</button>
    <h1 id="booking-title" style="margin: 14px 0 10px"></h1>

    <div class="mini-card">
      <div class="tour-badge" id="booking-tour-type"></div>
      <div class="tour-meta" id="booking-tour-meta"></div>
      <div class="tour-meta" id="booking-tour-desc"></div>
    </div>

    <div class="progress"><div class="progress-bar" id="booking-progress-bar"></div></div>

    <div id="booking-error" class="banner banner-error hidden"></div>
    <div id="booking-success" class="banner banner-success hidden"></div>

    <form id="booking-form">
      <input type="hidden" id="tour_id" />
      <div class="field">
        <label for="date_time">Дата и время *</label>
        <input type="datetime-local" id="date_time" required />
      </div>
      <div class="field">
        <label for="people_count">Количество гостей *</label>
        <input type="number" id="people_count" min="1" value="1" required />
      </div>
      <div class="field">
        <label for="client_name">Ваше имя *</label>
        <input type="text" id="client_name" required />
      </div>
      <div class="field">
        <label for="client_phone">Телефон *</label>
        <input type="tel" id="client_phone" placeholder="+7" required />
      </div>
      <div class="field">
        <label for="comment">Комментарий</label>
        <textarea id="comment" rows="2"></textarea>
      </div>
      <button type="submit" class="btn btn-primary" id="submit-button">Отправить заявку</button>
    </form>
  </div>

  <script>
    const tg = window.Telegram && window.Telegram.WebApp ? window.Telegram.WebApp : null;
    if (tg) {
      tg.ready();
      tg.expand();
    }
    const user = tg && tg.initDataUnsafe ? tg.initDataUnsafe.user : null;

    const toursContainer = document.getElementById('tours-container');
    const bookingContainer = document.getElementById('booking-container');
    const bookingTitle = document.getElementById('booking-title');
    const bookingType = document.getElementById('booking-tour-type');
    const bookingMeta = document.getElementById('booking-tour-meta');
    const bookingDesc = document.getElementById('booking-tour-desc');
    const progressBar = document.getElementById('booking-progress-bar');
    const errorEl = document.getElementById('booking-error');
    const successEl = document.getElementById('booking-success');

    const form = document.getElementById('booking-form');
    const tourIdInput = document.getElementById('tour_id');
    const dateTimeInput = document.getElementById('date_time');
    const peopleCountInput = document.getElementById('people_count');
    const clientNameInput = document.getElementById('client_name');
    const clientPhoneInput = document.getElementById('client_phone');
    const commentInput = document.getElementById('comment');
    const submitButton = document.getElementById('submit-button');

    const requiredInputs = [dateTimeInput, peopleCountInput, clientNameInput, clientPhoneInput];

    const showError = (text) => {
      errorEl.textContent = text;
      errorEl.classList.remove('hidden');
      successEl.classList.add('hidden');
    };

    const showSuccess = (text) => {
      successEl.textContent = text;
      successEl.classList.remove('hidden');
      errorEl.classList.add('hidden');
    };

    const updateProgress = () => {
      const filled = requiredInputs.filter((input) => input.value.trim().length > 0).length;
      progressBar.style.width = (filled / requiredInputs.length) * 100 + '%';
    };

    const openBookingForm = (data) => {
      tourIdInput.value = data.id;
      bookingTitle.textContent = data.title;
      bookingType.textContent = data.badge;
      bookingMeta.textContent = data.price + ' · ' + data.duration;
      bookingDesc.textContent = data.description || 'Выбран премиальный маршрут от Adler Tours.';

      errorEl.classList.add('hidden');
      successEl.classList.add('hidden');

      if (user && !clientNameInput.value) {
        const fullName = [user.first_name, user.last_name].filter(Boolean).join(' ');
        if (fullName) {
          clientNameInput.value = fullName;
        }
      }

      updateProgress();
      toursContainer.classList.add('hidden');
      bookingContainer.classList.remove('hidden');
    };

    document.querySelectorAll('.book-btn').forEach((btn) => {
      btn.addEventListener('click', () => {
        openBookingForm(btn.closest('.tour-card').dataset);
      });
    });

    document.getElementById('back-button').addEventListener('click', () => {
      bookingContainer.classList.add('hidden');
      toursContainer.classList.remove('hidden');
    });

    [dateTimeInput, peopleCountInput, clientNameInput, clientPhoneInput, commentInput].forEach((input) => {
      input.addEventListener('input', updateProgress);
    });

    form.addEventListener('submit', async (event) => {
      event.preventDefault();

      const payload = {
        tour_id: tourIdInput.value,
        date_time: dateTimeInput.value,
        people_count: peopleCountInput.value,
        client_name: clientNameInput.value.trim(),
        client_phone: clientPhoneInput.value.trim(),
        comment: commentInput.value.trim(),
        telegram_user_id: user ? user.id : null,
        telegram_username: user && user.username ? user.username : null
      };

      if (!payload.date_time || !payload.people_count || !payload.client_name || !payload.client_phone) {
        showError('Заполните все обязательные поля.');
        return;
      }

      submitButton.disabled = true;
      submitButton.textContent = 'Отправляем...';

      try {
        const res = await fetch('/api/bookings', {
          method: 'POST',
          headers: { 'Content-Type': 'application/json' },
          body: JSON.stringify(payload)
        });
        if (!res.ok) {
          throw new Error(await res.text());
        }
        showSuccess('Заявка отправлена! Мы скоро свяжемся с вами и подтвердим бронирование.');
        if (tg) {
          setTimeout(() => tg.close(), 2000);
        }
      } catch (err) {
        showError(err.message || 'Не удалось отправить заявку. Попробуйте ещё раз позже.');
      } finally {
        submitButton.disabled = false;
        submitButton.textContent = 'Отправить заявку';
      }
    });

    updateProgress();
  </script>
</body>
</html>
"#;

#[cfg(test)]
mod tests {
    use super::*;

    fn sea_trip() -> Tour {
        Tour {
            id: 1,
            title: "Sea Trip".to_string(),
            tour_type: TourType::Yacht,
            price_from: Some(5000.0),
            duration_hours: Some(3.0),
            description: Some("Relax.".to_string()),
            is_active: true,
            image_url: None,
        }
    }

    #[test]
    fn catalog_renders_card_with_price_and_duration() {
        let page = render_catalog(&[sea_trip()]);
        assert!(page.contains("Sea Trip"));
        assert!(page.contains("от 5 000 ₽"));
        assert!(page.contains(r#"data-duration="3 ч""#));
        assert!(page.contains(r#"data-title="Sea Trip""#));
        assert!(page.contains("tour-badge--yacht"));
    }

    #[test]
    fn empty_catalog_has_placeholder() {
        let page = render_catalog(&[]);
        assert!(page.contains("Пока нет доступных туров."));
    }

    #[test]
    fn error_page_keeps_shell_and_shows_banner() {
        let page = render_catalog_error("Не удалось загрузить туры. Попробуйте позже.");
        assert!(page.contains("banner-error"));
        assert!(page.contains("Не удалось загрузить туры"));
        assert!(!page.contains("{{CARDS}}"));
    }

    #[test]
    fn card_escapes_markup_in_titles() {
        let mut tour = sea_trip();
        tour.title = "<script>alert(1)</script>".to_string();
        let page = render_catalog(&[tour]);
        assert!(!page.contains("<script>alert(1)</script>"));
        assert!(page.contains("&lt;script&gt;"));
    }
}
